/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords and punctuation
/// - Nesting depth and tree height accounting (`enter`, `leave`, `grow`, `shrink`)
/// - Error construction for the current token
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::EndOfInput`].
    fn is_at_end(&self) -> bool {
        self.peek().kind.is_end()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.current
    }

    /// Replace the lookahead with the next token from the lexer and return the consumed one.
    fn advance(&mut self) -> Result<Token, SyntaxError> {
        let next = self.lexer.next_token()?;
        let consumed = std::mem::replace(&mut self.current, next);
        self.prev_end = consumed.span.end;
        Ok(consumed)
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuatorId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> Result<bool, SyntaxError> {
        if self.check_keyword(id) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn match_punct(&mut self, id: PunctuatorId) -> Result<bool, SyntaxError> {
        if self.check_punct(id) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<Token, SyntaxError> {
        if self.check_keyword(id) {
            self.advance()
        } else {
            Err(self.expected(keywords::as_str(id)))
        }
    }

    fn expect_punct(&mut self, id: PunctuatorId) -> Result<Token, SyntaxError> {
        if self.check_punct(id) {
            self.advance()
        } else {
            Err(self.expected(punctuation::as_str(id)))
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// `TokenExpected` error at the current token.
    fn expected(&self, what: &str) -> SyntaxError {
        SyntaxError::token_expected(what, &self.peek().describe(), self.current_span())
    }

    /// `UnexpectedToken` error at the current token.
    fn unexpected(&self) -> SyntaxError {
        SyntaxError::unexpected_token(&self.peek().describe(), self.current_span())
    }

    // ========================================================================
    // Nesting
    // ========================================================================

    /// Open one level of recursion. The level also counts toward the tree height.
    fn enter(&mut self) -> Result<(), SyntaxError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(SyntaxError::nesting_too_deep(
                self.options.max_depth,
                self.current_span(),
            ));
        }
        self.grow(1)
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.shrink(1);
    }

    /// Open `levels` of tree height without recursing (chain links, suffix stacks).
    fn grow(&mut self, levels: usize) -> Result<(), SyntaxError> {
        self.height += levels;
        self.peak = self.peak.max(self.height);
        if self.height > self.options.max_height {
            return Err(SyntaxError::tree_too_tall(
                self.options.max_height,
                self.current_span(),
            ));
        }
        Ok(())
    }

    fn shrink(&mut self, levels: usize) {
        self.height = self.height.saturating_sub(levels);
    }

    /// Check if the current token can start an expression
    fn is_at_expr_start(&self) -> bool {
        match &self.peek().kind {
            TokenKind::Identifier(_)
            | TokenKind::Number(_)
            | TokenKind::String(_)
            | TokenKind::Boolean(_)
            | TokenKind::Null => true,
            TokenKind::Keyword(id) => matches!(id, KeywordId::This | KeywordId::Super),
            TokenKind::Punctuation(id) => {
                matches!(id, PunctuatorId::LParen | PunctuatorId::LBracket) || PrefixOp::from_punctuator(*id).is_some()
            }
            TokenKind::EndOfInput => false,
        }
    }
}
