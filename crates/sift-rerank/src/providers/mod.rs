pub mod voyage;

pub use voyage::VoyageRerankClient;
