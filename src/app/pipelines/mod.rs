pub mod cli_pipeline;
pub mod import_pipeline;
pub mod soql_pipeline;

#[cfg(test)]
pub(crate) mod test_support;
