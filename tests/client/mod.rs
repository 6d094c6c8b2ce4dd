mod context;
mod filter;
