//! Directory aggregation.

use tracing::{error, info, trace};

use super::entry::{list_children, Child, Entry};
use super::Resolver;
use crate::error::ResolveResult;
use crate::naming::{self, AggregateKind};
use crate::outcome::{Outcome, SkipReason};
use crate::value::{Map, Value};

/// Aggregate under construction.
enum Collector {
    Array(Vec<Value>),
    Object(Map),
}

impl Collector {
    fn new(kind: AggregateKind) -> Self {
        match kind {
            AggregateKind::Array => Self::Array(Vec::new()),
            AggregateKind::Object => Self::Object(Map::new()),
        }
    }

    fn finish(self) -> Value {
        match self {
            Self::Array(items) => Value::Array(items),
            Self::Object(map) => Value::Object(map),
        }
    }
}

impl Resolver {
    /// Resolve every child of a directory into an array or object.
    ///
    /// Any child error aborts the whole directory; a partially built
    /// aggregate is never returned.
    pub(super) async fn aggregate(&self, dir: &Entry) -> ResolveResult<Outcome<Value>> {
        if naming::dir_key(&dir.name).is_empty() {
            error!(path = %dir.path.display(), "skipping invalid file");
            return Ok(Outcome::Skip(SkipReason::EmptyKey(dir.path.clone())));
        }

        let mut collector = Collector::new(AggregateKind::of(&dir.name));

        for child in list_children(&dir.path)? {
            if self.config.ignore.is_ignored(&child.path) {
                trace!(path = %child.path.display(), "ignored");
                continue;
            }

            match self.collect(&mut collector, &child).await {
                Ok(None) => {}
                Ok(Some(reason)) => info!("{reason}"),
                Err(e) => {
                    error!(
                        code = e.error_code(),
                        error = %e,
                        "unable to load file at path {}",
                        child.path.display()
                    );
                    return Err(e);
                }
            }
        }

        Ok(Outcome::Value(collector.finish()))
    }

    /// Resolve one child into the collector, returning why it was left out
    /// if it was.
    async fn collect(
        &self,
        collector: &mut Collector,
        child: &Child,
    ) -> ResolveResult<Option<SkipReason>> {
        match collector {
            Collector::Array(items) => match Box::pin(self.resolve(&child.path)).await? {
                Outcome::Value(value) => items.push(value),
                Outcome::Skip(reason) => return Ok(Some(reason)),
            },
            Collector::Object(map) => {
                let key = naming::child_key(&child.name, child.is_dir(self.config.follow_symlinks));
                if key.is_empty() {
                    return Ok(Some(SkipReason::EmptyKey(child.path.clone())));
                }
                match Box::pin(self.resolve(&child.path)).await? {
                    Outcome::Value(value) => {
                        map.insert(key.to_string(), value);
                    }
                    Outcome::Skip(reason) => return Ok(Some(reason)),
                }
            }
        }
        Ok(None)
    }
}
