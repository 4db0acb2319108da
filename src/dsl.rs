use std::ops::Not;

use crate::terms::Term;
use crate::variable::VariableKey;

// TODO: Support hedges ("very", "somewhat") as modifiers on Is
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Is(VariableKey, Term),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
}

impl Expr {
    pub fn or(self, rhs: Expr) -> Self {
        Expr::Or(Box::new(self), Box::new(rhs))
    }

    pub fn and(self, rhs: Expr) -> Self {
        Expr::And(Box::new(self), Box::new(rhs))
    }

    /// Every `variable is term` proposition in the expression, left to right
    pub fn propositions(&self) -> Vec<(VariableKey, Term)> {
        let mut props = Vec::new();

        fn parse(expr: &Expr, out: &mut Vec<(VariableKey, Term)>) {
            match expr {
                Expr::Is(var_key, term) => out.push((*var_key, *term)),
                Expr::And(lhs, rhs) | Expr::Or(lhs, rhs) => {
                    parse(lhs, out);
                    parse(rhs, out);
                },
                Expr::Not(expr) => parse(expr, out),
            }
        }

        parse(self, &mut props);

        props
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

impl VariableKey {
    pub fn is(self, term: Term) -> Expr {
        Expr::Is(self, term)
    }
}

#[test]
fn test_propositions() {
    use slotmap::SlotMap;

    let mut keys = SlotMap::<VariableKey, ()>::with_key();
    let participants = keys.insert(());
    let slots = keys.insert(());
    let expr = participants.is(Term::Medium).or(slots.is(Term::High)).and(!slots.is(Term::Low));

    assert_eq!(
        expr.propositions(),
        vec![(participants, Term::Medium), (slots, Term::High), (slots, Term::Low)]
    );
    assert!(matches!(expr, Expr::And(_, rhs) if matches!(*rhs, Expr::Not(_))));
}
