mod batch;
mod parser;
