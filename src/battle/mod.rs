pub mod actions;
pub mod ai;
pub mod chance;
pub mod state;
pub mod summary;

#[cfg(test)]
mod tests;
