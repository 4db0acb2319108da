use crate::dsl::Expr;
use crate::terms::Term;

#[derive(Clone, Debug, Default)]
pub struct Rules(pub(crate) Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    /// `if premise then output is consequence`
    pub fn add(&mut self, premise: Expr, consequence: Term) {
        self.0.push(Rule { premise, consequence });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub(crate) premise: Expr,
    pub(crate) consequence: Term,
}

impl Rule {
    pub fn premise(&self) -> &Expr {
        &self.premise
    }

    /// Term of the output variable this rule concludes
    pub fn consequence(&self) -> Term {
        self.consequence
    }
}
