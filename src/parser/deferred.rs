use std::cell::OnceCell;
use std::rc::Rc;

use super::combinators::BoxedParser;
use super::error::GrammarError;
use super::state::{Parser, State, nested};

/// Forward reference to a rule that is defined later.
///
/// Create the cell first, hand out [`Deferred::parser`] to every rule that
/// needs it (including the rule itself), then [`Deferred::define`] it once.
/// Resolution happens at invocation time.
///
/// ```ignore
/// let value = Deferred::new("value");
/// let array = literal("[")?.then(value.parser().sep_by(literal(",")?)).skip(literal("]")?);
/// value.define(number | array.map(Json::Array))?;
/// ```
pub struct Deferred<T> {
    name: Rc<str>,
    cell: Rc<OnceCell<BoxedParser<T>>>,
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Deferred {
            name: Rc::clone(&self.name),
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: 'static> Deferred<T> {
    pub fn new(name: &str) -> Self {
        Deferred {
            name: Rc::from(name),
            cell: Rc::new(OnceCell::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_defined(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Fill in the rule. A second definition is rejected.
    pub fn define(&self, parser: BoxedParser<T>) -> Result<(), GrammarError> {
        self.cell
            .set(parser)
            .map_err(|_| GrammarError::AlreadyDefined(self.name.to_string()))
    }

    /// A parser that resolves this rule each time it runs.
    ///
    /// Running it before [`Deferred::define`] is a grammar defect and panics.
    pub fn parser(&self) -> BoxedParser<T> {
        let name = Rc::clone(&self.name);
        let cell = Rc::clone(&self.cell);
        BoxedParser::new(move |state: &State| {
            let Some(rule) = cell.get() else {
                panic!("rule `{name}` was invoked before it was defined");
            };
            log::trace!("entering `{name}` at offset {}", state.position());
            nested(state, |inner| rule.parse(inner))
        })
        .labelled(&self.name)
    }
}
