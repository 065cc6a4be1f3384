/// Statement parsing.
///
/// Statement items are declarations (`var`/`const`, terminated by `;`) or statements. Dispatch is on the current
/// token's keyword/punctuator id; anything that can start an expression falls through to an expression statement.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement_item(&mut self) -> Result<Statement, SyntaxError> {
        if self.check_keyword(KeywordId::Var) || self.check_keyword(KeywordId::Const) {
            let decl = self.var_declaration()?;
            self.expect_punct(PunctuatorId::Semicolon)?;
            Ok(decl)
        } else {
            self.statement()
        }
    }

    fn statement(&mut self) -> Result<Statement, SyntaxError> {
        self.enter()?;
        let stmt = self.statement_inner()?;
        self.leave();
        Ok(stmt)
    }

    fn statement_inner(&mut self) -> Result<Statement, SyntaxError> {
        if self.check_punct(PunctuatorId::LBrace) {
            Ok(Statement::Block(self.block()?))
        } else if self.match_punct(PunctuatorId::Semicolon)? {
            Ok(Statement::Empty)
        } else if self.check_keyword(KeywordId::If) {
            self.if_stmt()
        } else if self.check_keyword(KeywordId::While) {
            self.while_stmt()
        } else if self.check_keyword(KeywordId::For) {
            self.for_stmt()
        } else if self.check_keyword(KeywordId::Do) {
            self.do_while_stmt()
        } else if self.check_keyword(KeywordId::Switch) {
            self.switch_stmt()
        } else if self.match_keyword(KeywordId::Break)? {
            let label = self.optional_label()?;
            self.expect_punct(PunctuatorId::Semicolon)?;
            Ok(Statement::Break { label })
        } else if self.match_keyword(KeywordId::Continue)? {
            let label = self.optional_label()?;
            self.expect_punct(PunctuatorId::Semicolon)?;
            Ok(Statement::Continue { label })
        } else if self.match_keyword(KeywordId::Return)? {
            let argument = self.optional_expression()?;
            self.expect_punct(PunctuatorId::Semicolon)?;
            Ok(Statement::Return { argument })
        } else if self.check_keyword(KeywordId::Throw) {
            self.throw_stmt()
        } else if self.check_keyword(KeywordId::Try) {
            self.try_stmt()
        } else if self.is_at_expr_start() {
            self.expr_or_label_stmt()
        } else {
            Err(self.unexpected())
        }
    }

    /// `{ StatementItem* }`
    fn block(&mut self) -> Result<Block, SyntaxError> {
        self.expect_punct(PunctuatorId::LBrace)?;
        let mut body = Vec::new();
        while !self.is_at_end() && !self.check_punct(PunctuatorId::RBrace) {
            body.push(self.statement_item()?);
        }
        self.expect_punct(PunctuatorId::RBrace)?;
        Ok(Block { body })
    }

    /// `var a = 1, b` / `const c = 2`, without the terminating `;`.
    fn var_declaration(&mut self) -> Result<Statement, SyntaxError> {
        let binding = match self.peek().keyword_id().and_then(BindingKind::from_keyword) {
            Some(binding) => binding,
            None => return Err(self.expected("var")),
        };
        self.advance()?;

        let first = self.var_declarator(binding)?;
        if !self.check_punct(PunctuatorId::Comma) {
            return Ok(Statement::VarDecl(first));
        }

        let mut list = vec![first];
        while self.match_punct(PunctuatorId::Comma)? {
            list.push(self.var_declarator(binding)?);
        }
        Ok(Statement::VarDeclList { list })
    }

    fn var_declarator(&mut self, binding: BindingKind) -> Result<VarDecl, SyntaxError> {
        let name = self.identifier()?;
        let init = if self.match_punct(PunctuatorId::Assign)? {
            Some(self.expression()?)
        } else {
            None
        };
        Ok(VarDecl { name, binding, init })
    }

    fn if_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::If)?;
        let test = self.paren_expression()?;
        let consequent = Box::new(self.statement()?);
        let alternate = if self.match_keyword(KeywordId::Else)? {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Statement::If(IfStmt {
            test,
            consequent,
            alternate,
        }))
    }

    fn while_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::While)?;
        let condition = self.paren_expression()?;
        let body = Box::new(self.statement()?);
        Ok(Statement::While(WhileStmt { condition, body }))
    }

    fn do_while_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Do)?;
        let body = Box::new(self.statement()?);
        self.expect_keyword(KeywordId::While)?;
        let condition = self.paren_expression()?;
        self.expect_punct(PunctuatorId::Semicolon)?;
        Ok(Statement::DoWhile(DoWhileStmt { body, condition }))
    }

    /// `for ( [Init] ; [Expr] ; [Update] ) Statement`
    fn for_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::For)?;
        self.expect_punct(PunctuatorId::LParen)?;

        let init = if self.check_keyword(KeywordId::Var) || self.check_keyword(KeywordId::Const) {
            Some(ForInit::Declaration(Box::new(self.var_declaration()?)))
        } else if self.check_punct(PunctuatorId::Semicolon) {
            None
        } else {
            self.clause_list(PunctuatorId::Semicolon)?.map(ForInit::Expr)
        };
        self.expect_punct(PunctuatorId::Semicolon)?;

        let condition = self.optional_expression()?;
        self.expect_punct(PunctuatorId::Semicolon)?;

        let update = if self.check_punct(PunctuatorId::RParen) {
            None
        } else {
            self.clause_list(PunctuatorId::RParen)?
        };
        self.expect_punct(PunctuatorId::RParen)?;

        let body = Box::new(self.statement()?);
        Ok(Statement::For(ForStmt {
            init,
            condition,
            update,
            body,
        }))
    }

    /// `switch ( Expr ) { CaseClause* }`
    fn switch_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Switch)?;
        let discriminant = self.paren_expression()?;
        self.expect_punct(PunctuatorId::LBrace)?;

        let mut cases = Vec::new();
        let mut seen_default = false;
        while !self.is_at_end() && !self.check_punct(PunctuatorId::RBrace) {
            let start = self.current_span();
            let clause = self.case_clause()?;
            if clause.is_default() {
                if seen_default {
                    return Err(SyntaxError::duplicate_default(start));
                }
                seen_default = true;
            }
            cases.push(clause);
        }
        self.expect_punct(PunctuatorId::RBrace)?;

        Ok(Statement::Switch(SwitchStmt {
            discriminant,
            cases,
        }))
    }

    fn case_clause(&mut self) -> Result<CaseClause, SyntaxError> {
        let test = if self.check_keyword(KeywordId::Case) {
            let case_span = self.advance()?.span;
            if !self.is_at_expr_start() {
                return Err(SyntaxError::empty_case(case_span.merge(self.current_span())));
            }
            Some(self.expression()?)
        } else if self.match_keyword(KeywordId::Default)? {
            None
        } else {
            return Err(self.unexpected());
        };
        self.expect_punct(PunctuatorId::Colon)?;

        let mut body = Vec::new();
        while !self.is_at_end()
            && !self.check_keyword(KeywordId::Case)
            && !self.check_keyword(KeywordId::Default)
            && !self.check_punct(PunctuatorId::RBrace)
        {
            body.push(self.statement_item()?);
        }
        Ok(CaseClause { test, body })
    }

    fn throw_stmt(&mut self) -> Result<Statement, SyntaxError> {
        let throw_span = self.expect_keyword(KeywordId::Throw)?.span;
        if !self.is_at_expr_start() {
            return Err(SyntaxError::empty_throw(throw_span.merge(self.current_span())));
        }
        let argument = self.expression()?;
        self.expect_punct(PunctuatorId::Semicolon)?;
        Ok(Statement::Throw { argument })
    }

    /// `try Block catch ( Identifier ) Block [finally Block]`
    fn try_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Try)?;
        let body = self.block()?;

        self.expect_keyword(KeywordId::Catch)?;
        self.expect_punct(PunctuatorId::LParen)?;
        let param = self.identifier()?;
        self.expect_punct(PunctuatorId::RParen)?;
        let handler = self.block()?;

        let finalizer = if self.match_keyword(KeywordId::Finally)? {
            Some(self.block()?)
        } else {
            None
        };

        Ok(Statement::TryCatch(TryCatchStmt {
            body,
            param,
            handler,
            finalizer,
        }))
    }

    /// Expression statement, or `label: Statement` when the statement is a lone identifier followed by `:`.
    fn expr_or_label_stmt(&mut self) -> Result<Statement, SyntaxError> {
        let starts_with_identifier = self.peek().kind.is_identifier();
        let expr = self.expression()?;

        if starts_with_identifier && self.check_punct(PunctuatorId::Colon) {
            if let Some(label) = expr.as_identifier() {
                let label = label.to_string();
                self.advance()?;
                let body = Box::new(self.statement()?);
                return Ok(Statement::Label { label, body });
            }
        }

        self.expect_punct(PunctuatorId::Semicolon)?;
        Ok(Statement::Expr { expr })
    }

    fn optional_label(&mut self) -> Result<Option<Ident>, SyntaxError> {
        if self.peek().kind.is_identifier() {
            Ok(Some(self.identifier()?))
        } else {
            Ok(None)
        }
    }
}
