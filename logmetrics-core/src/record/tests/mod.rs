#[cfg(test)]
mod source_tests;
