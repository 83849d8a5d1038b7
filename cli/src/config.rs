use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use bookrank::ranking::Order;

#[derive(Parser, Debug)]
#[command(name = "bookrank", author, version, about)]
pub struct Config {
    /// Path to a scenario in json format describing books, users, friendships and the queries to
    /// run against them.
    ///
    /// If not supplied, the built-in demo network is used.
    #[arg(short, long, value_name = "PATH")]
    pub scenario: Option<PathBuf>,

    /// Order in which ranked books are listed.
    ///
    /// `ascending` lists the least-read books first and is the established behavior.
    #[arg(short, long, value_enum, default_value_t = OrderName::Ascending)]
    pub order: OrderName,

    /// Print query results as json instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum OrderName {
    Ascending,
    Descending,
}

impl OrderName {
    pub fn create_impl(&self) -> Order {
        match self {
            OrderName::Ascending => Order::Ascending,
            OrderName::Descending => Order::Descending,
        }
    }
}
