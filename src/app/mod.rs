pub mod finance_manager;

pub use finance_manager::FinanceManager;
