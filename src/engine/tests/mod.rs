mod common;
mod environment;
mod filter;
