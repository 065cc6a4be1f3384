/// Miscellaneous parser utilities.
///
/// Identifier consumption and the comma-separated element lists shared by array literals and `for` clauses.
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self) -> Result<Ident, SyntaxError> {
        match &self.peek().kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            }
            _ => Err(self.expected("identifier")),
        }
    }

    /// Comma-separated expressions up to (not including) `wall`.
    ///
    /// A comma with no expression before it is a hole (`None`). A comma directly before `wall` is a trailing comma
    /// and adds nothing, so `[1,]` has one element and `[1,,]` has two.
    fn element_list(&mut self, wall: PunctuatorId) -> Result<Vec<Option<Expr>>, SyntaxError> {
        let mut elements = Vec::new();
        while !self.is_at_end() && !self.check_punct(wall) {
            if self.match_punct(PunctuatorId::Comma)? {
                elements.push(None);
                continue;
            }
            let element = self.expression()?;
            if !self.check_punct(wall) {
                self.expect_punct(PunctuatorId::Comma)?;
            }
            elements.push(Some(element));
        }
        Ok(elements)
    }

    /// A `for` init/update clause: one expression stands alone, anything else becomes an [`Expr::ExprList`].
    fn clause_list(&mut self, wall: PunctuatorId) -> Result<Option<Expr>, SyntaxError> {
        let mut list = self.element_list(wall)?;
        if list.len() == 1 {
            Ok(list.pop().flatten())
        } else {
            Ok(Some(Expr::ExprList { list }))
        }
    }
}
