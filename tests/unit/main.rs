//! Unit tests mirroring the `src/` tree, plus checks for the binary's argument surface

mod algorithm;
mod io;
mod math;
mod spatial;

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use tilecollapse::io::cli::Cli;

    // Tests the clap definition has no conflicting flags or bad defaults
    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    // Tests the binary advertises its own name
    #[test]
    fn test_binary_name() {
        assert_eq!(Cli::command().get_name(), "tilecollapse");
    }
}
