pub mod career;
pub mod save;
pub mod transfers;

pub use career::{Career, CareerError, Finances};
pub use save::SaveRecord;
pub use transfers::{TransferMarket, TRANSFER_FEE};
