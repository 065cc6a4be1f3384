/// Binary operator tiers, loosest first; a later tier binds tighter. Operands of the tightest tier are prefix
/// expressions.
const BINARY_TIERS: &[&[BinaryOp]] = &[
    &[BinaryOp::Or],
    &[BinaryOp::And],
    &[BinaryOp::BitOr],
    &[BinaryOp::BitXor],
    &[BinaryOp::BitAnd],
    &[BinaryOp::Eq, BinaryOp::NotEq],
    &[
        BinaryOp::Lt,
        BinaryOp::Gt,
        BinaryOp::LtEq,
        BinaryOp::GtEq,
        BinaryOp::Instanceof,
    ],
    &[BinaryOp::Shl, BinaryOp::Shr, BinaryOp::UShr],
    &[BinaryOp::Add, BinaryOp::Sub],
    &[BinaryOp::Mul, BinaryOp::Div, BinaryOp::Mod],
];

fn binary_tier(op: BinaryOp) -> Option<usize> {
    BINARY_TIERS.iter().position(|tier| tier.contains(&op))
}

/// Expression parsing.
///
/// Operator chains (assignment, ternary, binary operators, prefix operators, suffixes) are parsed with loops, then
/// folded from the right so the resulting trees lean right. Only genuinely nested expressions recurse through
/// [`Parser::expression`] and count against the nesting limit; every chain link still counts toward the tree height.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        self.enter()?;
        let expr = self.assignment()?;
        self.leave();
        Ok(expr)
    }

    /// An expression if the current token can start one.
    fn optional_expression(&mut self) -> Result<Option<Expr>, SyntaxError> {
        if self.is_at_expr_start() {
            self.expression().map(Some)
        } else {
            Ok(None)
        }
    }

    /// `( Expr )`
    fn paren_expression(&mut self) -> Result<Expr, SyntaxError> {
        self.expect_punct(PunctuatorId::LParen)?;
        let expr = self.expression()?;
        self.expect_punct(PunctuatorId::RParen)?;
        Ok(expr)
    }

    /// `Ternary [AssignOp Expr]`, with `a = b = c` nesting as `a = (b = c)`.
    fn assignment(&mut self) -> Result<Expr, SyntaxError> {
        let mut targets = Vec::new();
        let mut start = self.current_span().start;
        let mut expr = self.ternary()?;

        while let Some(op) = self.peek().punctuator_id().and_then(AssignOp::from_punctuator) {
            if !expr.is_assignable() {
                return Err(SyntaxError::illegal_lhs(Span::new(start, self.prev_end)));
            }
            self.advance()?;
            targets.push((expr, op));
            self.grow(1)?;
            start = self.current_span().start;
            expr = self.ternary()?;
        }
        self.shrink(targets.len());

        Ok(targets
            .into_iter()
            .rev()
            .fold(expr, |rhs, (lhs, op)| Expr::Assignment {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            }))
    }

    /// `CondOr [? Expr : Ternary]`; the false branch chains to the right.
    fn ternary(&mut self) -> Result<Expr, SyntaxError> {
        let mut branches = Vec::new();
        let mut test = self.binary()?;

        while self.match_punct(PunctuatorId::Question)? {
            self.grow(1)?;
            let consequent = self.expression()?;
            self.expect_punct(PunctuatorId::Colon)?;
            branches.push((test, consequent));
            test = self.binary()?;
        }
        self.shrink(branches.len());

        Ok(branches
            .into_iter()
            .rev()
            .fold(test, |alternate, (test, consequent)| Expr::Ternary {
                test: Box::new(test),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
            }))
    }

    /// The current token as a binary operator, with its tier.
    fn binary_operator(&self) -> Option<(BinaryOp, usize)> {
        let op = self.peek().kind.binary_op()?;
        binary_tier(op).map(|tier| (op, tier))
    }

    /// Every binary tier in one pass: `Operand (op Operand)*` with precedence resolved on an explicit stack.
    ///
    /// A pending operator is reduced only when a strictly looser one follows, so operators of one tier fold right:
    /// `a - b - c` is `a - (b - c)` and `a * b + c` is `(a * b) + c`.
    fn binary(&mut self) -> Result<Expr, SyntaxError> {
        let mut pending: Vec<(Expr, BinaryOp, usize)> = Vec::new();
        let mut links = 0;
        let mut operand = self.unary()?;

        while let Some((op, tier)) = self.binary_operator() {
            self.advance()?;
            while pending.last().is_some_and(|&(_, _, top)| top > tier) {
                if let Some((left, top_op, _)) = pending.pop() {
                    operand = Expr::binary(top_op, left, operand);
                }
            }
            pending.push((operand, op, tier));
            self.grow(1)?;
            links += 1;
            operand = self.unary()?;
        }
        self.shrink(links);

        Ok(pending
            .into_iter()
            .rev()
            .fold(operand, |right, (left, op, _)| Expr::binary(op, left, right)))
    }

    /// Prefix operators stack: `- - x` is `UnaryMinus(UnaryMinus(x))`.
    fn unary(&mut self) -> Result<Expr, SyntaxError> {
        let mut prefixes = Vec::new();
        while let Some(op) = self.peek().punctuator_id().and_then(PrefixOp::from_punctuator) {
            self.advance()?;
            prefixes.push(op);
            self.grow(1)?;
        }

        let operand = self.postfix()?;
        self.shrink(prefixes.len());
        Ok(prefixes
            .into_iter()
            .rev()
            .fold(operand, |expr, op| Expr::prefix(op, expr)))
    }

    /// `Primary [++ | --]`; at most one postfix operator applies.
    fn postfix(&mut self) -> Result<Expr, SyntaxError> {
        let expr = self.primary()?;
        if self.match_punct(PunctuatorId::PlusPlus)? {
            Ok(Expr::PostInc {
                operand: Box::new(expr),
            })
        } else if self.match_punct(PunctuatorId::MinusMinus)? {
            Ok(Expr::PostDec {
                operand: Box::new(expr),
            })
        } else {
            Ok(expr)
        }
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        // Number, boolean and null literals never take a suffix chain
        match self.current.kind {
            TokenKind::Number(value) => {
                self.advance()?;
                return Ok(Expr::Number { value });
            }
            TokenKind::Boolean(value) => {
                self.advance()?;
                return Ok(Expr::Boolean { value });
            }
            TokenKind::Null => {
                self.advance()?;
                return Ok(Expr::Null);
            }
            _ => {}
        }

        // Suffix nodes end up above the whole head, so measure how tall the head is
        let base = self.height;
        let outer_peak = std::mem::replace(&mut self.peak, base);
        let head = if let TokenKind::String(value) = &self.peek().kind {
            let value = value.clone();
            self.advance()?;
            Expr::String { value }
        } else if self.match_keyword(KeywordId::This)? {
            Expr::Fixed {
                value: FixedRef::This,
            }
        } else if self.match_keyword(KeywordId::Super)? {
            Expr::Fixed {
                value: FixedRef::Super,
            }
        } else if self.peek().kind.is_identifier() {
            Expr::Identifier {
                name: self.identifier()?,
            }
        } else if self.check_punct(PunctuatorId::LParen) {
            self.paren_expression()?
        } else if self.match_punct(PunctuatorId::LBracket)? {
            let elements = self.element_list(PunctuatorId::RBracket)?;
            self.expect_punct(PunctuatorId::RBracket)?;
            Expr::ArrayLiteral { elements }
        } else {
            return Err(self.unexpected());
        };
        let head_height = self.peak.saturating_sub(base);
        self.peak = self.peak.max(outer_peak);

        self.suffixes(head, head_height)
    }

    /// `.name`, `[index]` and `(args)` suffixes, applied left to right.
    fn suffixes(&mut self, mut expr: Expr, head_height: usize) -> Result<Expr, SyntaxError> {
        let mut grown = 0;
        loop {
            let is_suffix = self.check_punct(PunctuatorId::Dot)
                || self.check_punct(PunctuatorId::LBracket)
                || self.check_punct(PunctuatorId::LParen);
            if !is_suffix {
                self.shrink(grown);
                return Ok(expr);
            }
            let levels = if grown == 0 { head_height + 1 } else { 1 };
            self.grow(levels)?;
            grown += levels;

            if self.match_punct(PunctuatorId::Dot)? {
                let member = self.identifier()?;
                expr = Expr::MemberAccess {
                    owner: Box::new(expr),
                    member,
                };
            } else if self.match_punct(PunctuatorId::LBracket)? {
                let index = self.expression()?;
                self.expect_punct(PunctuatorId::RBracket)?;
                expr = Expr::ArrayAccess {
                    owner: Box::new(expr),
                    index: Box::new(index),
                };
            } else {
                self.expect_punct(PunctuatorId::LParen)?;
                let arguments = self.call_arguments()?;
                expr = Expr::FunctionCall {
                    callee: Box::new(expr),
                    arguments,
                };
            }
        }
    }

    /// Arguments after `(` through the closing `)`. A trailing comma is allowed.
    fn call_arguments(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        let mut arguments = Vec::new();
        while !self.check_punct(PunctuatorId::RParen) {
            arguments.push(self.expression()?);
            if self.check_punct(PunctuatorId::RParen) {
                break;
            }
            self.expect_punct(PunctuatorId::Comma)?;
        }
        self.expect_punct(PunctuatorId::RParen)?;
        Ok(arguments)
    }
}
