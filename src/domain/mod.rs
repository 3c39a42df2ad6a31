mod advice;
mod category;
mod ledger;
mod money;
mod transaction;

pub use advice::*;
pub use category::*;
pub use ledger::*;
pub use money::*;
pub use transaction::*;
