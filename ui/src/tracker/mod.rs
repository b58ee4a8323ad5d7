pub mod wear;
