/// Parser core types and entrypoint.
///
/// This chunk defines [`ParseOptions`], the [`Parser`] type and its top-level `parse_script()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default bound on the height of the produced tree, operator chains included.
pub const DEFAULT_MAX_HEIGHT: usize = 512;

/// Tunables for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum recursive nesting of statements and expressions (parentheses, brackets, call arguments, right-hand
    /// sides). Operator chains are parsed iteratively and do not count here.
    pub max_depth: usize,
    /// Maximum height of the tree. Every nesting level and every link of an operator or suffix chain counts, so the
    /// recursive `Drop`, `Debug` and `Serialize` of any accepted tree stay bounded.
    pub max_height: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser owns its [`Lexer`] and exactly one lookahead token; tokens are pulled on demand.
/// - There is no error recovery: the first error is returned and the parser is consumed.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    /// End offset of the most recently consumed token.
    prev_end: usize,
    depth: usize,
    /// Levels of tree currently open above the token being parsed.
    height: usize,
    /// Highest `height` reached since the last mark (see `primary`).
    peak: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Create a parser with default options and prime the lookahead.
    ///
    /// ## Errors
    /// Fails if the very first token is not lexically valid.
    pub fn new(source: &'a str) -> Result<Self, SyntaxError> {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: &'a str, options: ParseOptions) -> Result<Self, SyntaxError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            prev_end: 0,
            depth: 0,
            height: 0,
            peak: 0,
            options,
        })
    }

    /// Parse statement items until end of input.
    ///
    /// An empty (or trivia-only) source yields an empty [`Script`].
    pub fn parse_script(mut self) -> Result<Script, SyntaxError> {
        let mut body = Vec::new();
        while !self.is_at_end() {
            body.push(self.statement_item()?);
        }
        tracing::debug!(statements = body.len(), "parsed script");
        Ok(Script { body })
    }
}
