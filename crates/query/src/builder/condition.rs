//! Builds the boundary predicate that selects rows strictly after (or
//! strictly before) a cursor position.

use crate::ast::expr::{BinaryOperator, Expr, ident, value};
use model::{
    error::OrderError,
    order::{definition::OrderDirection, spec::OrderSpec},
    pagination::cursor::Cursor,
};

pub struct ConditionBuilder;

impl ConditionBuilder {
    /// Predicate selecting rows strictly after the cursor position in the
    /// given order. For definitions `[d1, .., dn]` with cursor values
    /// `[v1, .., vn]` this is the disjunction
    ///
    /// ```text
    /// (a1 > v1)
    /// OR (a1 = v1 AND a2 > v2)
    /// OR ...
    /// OR (a1 = v1 AND ... AND a(n-1) = v(n-1) AND an > vn)
    /// ```
    ///
    /// with `>` flipped to `<` for descending columns. Duplicate values in
    /// non-distinct columns neither skip nor repeat rows: the final
    /// distinct column always disambiguates.
    pub fn build_after(order: &OrderSpec, cursor: &Cursor) -> Result<Expr, OrderError> {
        Self::build(order, cursor, false)
    }

    /// Same construction with every comparator flipped: rows strictly
    /// before the cursor position.
    pub fn build_before(order: &OrderSpec, cursor: &Cursor) -> Result<Expr, OrderError> {
        Self::build(order, cursor, true)
    }

    fn build(order: &OrderSpec, cursor: &Cursor, before: bool) -> Result<Expr, OrderError> {
        if cursor.is_empty() {
            return Ok(Expr::always_true());
        }

        let mut terms: Vec<Expr> = Vec::new();
        let mut equals_prefix: Option<Expr> = None;

        for def in order.definitions() {
            let val = cursor
                .get(&def.attribute)
                .cloned()
                .ok_or_else(|| OrderError::UnknownAttribute {
                    attribute: def.attribute.clone(),
                })?;

            let strict = Expr::compare(
                ident(&def.attribute),
                comparator(def.direction, before),
                value(val.clone()),
            );
            terms.push(match &equals_prefix {
                Some(prefix) => prefix.clone().and(strict),
                None => strict,
            });

            let eq = Expr::compare(ident(&def.attribute), BinaryOperator::Eq, value(val));
            equals_prefix = Some(match equals_prefix {
                Some(prefix) => prefix.and(eq),
                None => eq,
            });
        }

        Ok(terms
            .into_iter()
            .reduce(Expr::or)
            .unwrap_or_else(Expr::always_true))
    }
}

fn comparator(direction: OrderDirection, before: bool) -> BinaryOperator {
    match (direction.is_ascending(), before) {
        (true, false) => BinaryOperator::Gt,
        (false, false) => BinaryOperator::Lt,
        (true, true) => BinaryOperator::Lt,
        (false, true) => BinaryOperator::Gt,
    }
}
