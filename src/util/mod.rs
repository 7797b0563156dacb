pub mod cli;
pub mod de;
