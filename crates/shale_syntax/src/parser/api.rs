/// Parse `source` into a [`Script`] with default [`ParseOptions`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns the first lexical or syntactic error; no partial tree is produced.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Script, SyntaxError> {
    Parser::new(source)?.parse_script()
}

/// Parse `source` with explicit options (e.g. tighter depth and height limits for untrusted input).
#[tracing::instrument(skip_all, fields(source_len = source.len(), max_depth = options.max_depth, max_height = options.max_height))]
pub fn parse_with_options(source: &str, options: ParseOptions) -> Result<Script, SyntaxError> {
    Parser::with_options(source, options)?.parse_script()
}
