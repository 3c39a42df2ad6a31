use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::application::{BudgetService, CategoryDecision, ExpenseOutcome, ExpenseReceipt};
use crate::domain::{format_cents, parse_cents, BalanceTier};

/// Kakebo - Family Budget Tracker
#[derive(Parser)]
#[command(name = "kakebo")]
#[command(about = "An interactive family budget tracker for the command line")]
#[command(version)]
pub struct Cli {
    /// Number of dependents to start with (skips the startup prompt)
    #[arg(short, long)]
    pub dependents: Option<i64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut session = Session {
            service: BudgetService::new(),
            verbose: self.verbose,
        };
        session.start(self.dependents)
    }
}

/// The interactive read-evaluate loop. Owns the service for the process
/// lifetime; every prompt is line-oriented, and EOF at any prompt ends the
/// session cleanly instead of spinning on a closed stream.
struct Session {
    service: BudgetService,
    verbose: bool,
}

impl Session {
    fn start(&mut self, dependents: Option<i64>) -> Result<()> {
        println!("Welcome to Kakebo!");
        println!("Track your income and expenses, and get simple advice to keep the family finances healthy.");
        println!();

        match dependents {
            Some(count) => self.apply_dependents(count),
            None => {
                if !self.prompt_dependents()? {
                    return Ok(());
                }
            }
        }

        self.menu_loop()
    }

    /// Returns false when stdin is exhausted before a usable answer.
    fn prompt_dependents(&mut self) -> Result<bool> {
        loop {
            let Some(raw) = prompt("How many dependents do you have? ")? else {
                return Ok(false);
            };
            match raw.parse::<i64>() {
                Ok(count) => {
                    self.apply_dependents(count);
                    return Ok(true);
                }
                Err(_) => println!("Invalid number. Please enter a whole number."),
            }
        }
    }

    fn apply_dependents(&mut self, count: i64) {
        match self.service.set_dependents(count) {
            Ok(()) => println!("Dependents set to: {}", self.service.dependents()),
            Err(err) => println!("{err}."),
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            print_menu();
            let Some(choice) = prompt("Enter your choice: ")? else {
                return Ok(());
            };
            match choice.parse::<u32>() {
                Ok(1) => self.run_add_income()?,
                Ok(2) => self.run_add_expense()?,
                Ok(3) => self.run_view_balance(),
                Ok(4) => self.run_view_transactions(),
                Ok(5) => self.run_view_categories(),
                Ok(6) => self.run_advice(),
                Ok(7) => {
                    println!("Thank you for using Kakebo. Goodbye!");
                    return Ok(());
                }
                _ => println!("Invalid choice. Please enter a number between 1 and 7."),
            }
        }
    }

    fn run_add_income(&mut self) -> Result<()> {
        let Some(raw) = prompt("Enter income amount: $")? else {
            return Ok(());
        };
        let Ok(amount_cents) = parse_cents(&raw) else {
            println!("Invalid amount. Please enter a valid number.");
            return Ok(());
        };

        match self.service.add_income(amount_cents) {
            Ok(receipt) => {
                println!(
                    "Income added successfully! Your balance is now ${}",
                    format_cents(receipt.balance_cents)
                );
                self.note_recorded();
            }
            Err(err) => println!("{err}."),
        }
        Ok(())
    }

    fn run_add_expense(&mut self) -> Result<()> {
        let Some(category) =
            prompt("Enter expense category (e.g., Retirement, Student Loan, etc.): ")?
        else {
            return Ok(());
        };
        let Some(raw) = prompt("Enter expense amount: $")? else {
            return Ok(());
        };
        let Ok(amount_cents) = parse_cents(&raw) else {
            println!("Invalid amount. Please enter a valid number.");
            return Ok(());
        };

        match self.service.add_expense(&category, amount_cents) {
            Ok(ExpenseOutcome::Recorded(receipt)) => self.report_expense(&receipt),
            Ok(ExpenseOutcome::UnknownCategory(pending)) => {
                println!("Category not found: {}", pending.category);
                let Some(answer) = prompt("Would you like to add this category? (y/n): ")? else {
                    return Ok(());
                };
                let accept = matches!(answer.to_lowercase().as_str(), "y" | "yes");
                match self.service.confirm_category(pending, accept) {
                    Ok(CategoryDecision::Registered(receipt)) => {
                        println!("Category added: {}", receipt.category);
                        self.report_expense(&receipt);
                    }
                    Ok(CategoryDecision::Declined) => {
                        println!("Expense not recorded. Please try again with an existing category.");
                    }
                    Err(err) => println!("{err}."),
                }
            }
            Err(err) => println!("{err}."),
        }
        Ok(())
    }

    fn report_expense(&self, receipt: &ExpenseReceipt) {
        println!(
            "Expense of ${} added under {} category.",
            format_cents(receipt.amount_cents),
            receipt.category
        );
        println!(
            "Your updated balance is: ${}",
            format_cents(receipt.balance_cents)
        );
        self.note_recorded();
    }

    fn run_view_balance(&self) {
        println!("\n--- Current Balance ---");
        println!("Your balance: ${}", format_cents(self.service.balance_cents()));
    }

    fn run_view_transactions(&self) {
        println!("\n--- Transaction Summary ---");
        println!("{:<10}{:<20}{:<10}", "Type", "Category", "Amount");
        println!("{}", "-".repeat(40));

        for t in self.service.transactions() {
            println!(
                "{:<10}{:<20}${:<10}",
                t.kind.as_str(),
                t.category,
                format_cents(t.amount_cents)
            );
        }

        println!(
            "\nTotal balance: ${}",
            format_cents(self.service.balance_cents())
        );
    }

    fn run_view_categories(&self) {
        println!("\n--- Available Expense Categories ---");
        let categories = self.service.categories();
        if categories.is_empty() {
            println!("No categories available. Please add some categories.");
        } else {
            for name in categories {
                println!("- {}", name);
            }
        }
    }

    fn run_advice(&self) {
        println!("\n--- Financial Advice ---");

        let advice = self.service.advice();
        match advice.tier {
            BalanceTier::Overdrawn => {
                println!("Your balance is negative. Prioritize essential expenses such as savings, healthcare, and student loans.");
                println!("Track your spending carefully and look for ways to cut back on non-essential expenses.");
            }
            BalanceTier::Comfortable => {
                println!("Great job! You have a healthy balance. Consider setting up an emergency fund or investing for your future.");
            }
            BalanceTier::Steady => {
                println!("Keep up the good work! Try to continue saving and avoid spending too much on unnecessary items.");
            }
        }

        if advice.has_dependents() {
            println!(
                "As you have {} dependent(s), make sure their well-being is covered. Consider setting aside extra funds for healthcare and education.",
                advice.dependents
            );
        } else {
            println!("Without dependents, your financial flexibility is greater. Consider saving for future goals like home ownership or retirement.");
        }
    }

    fn note_recorded(&self) {
        if !self.verbose {
            return;
        }
        if let Some(t) = self.service.transactions().last() {
            eprintln!(
                "[kakebo] {} of {} under {} recorded at {}",
                t.kind,
                format_cents(t.amount_cents),
                t.category,
                t.recorded_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
    }
}

fn print_menu() {
    println!();
    println!("--- Family Budget Menu ---");
    println!("1. Add Income");
    println!("2. Add Expense");
    println!("3. View Balance");
    println!("4. View Transactions");
    println!("5. View Expense Categories");
    println!("6. Financial Advice");
    println!("7. Exit");
}

/// Print a prompt, flush, and read one trimmed line from stdin.
/// Returns None once stdin is exhausted.
fn prompt(text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
