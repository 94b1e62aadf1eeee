use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Server for the address directory")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Size of the database connection pool
    #[arg(long, value_name = "COUNT")]
    pub pool_size: Option<u8>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,
}
