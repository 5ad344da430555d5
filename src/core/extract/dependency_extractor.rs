//! Extraction of `goog.provide` / `goog.require` namespaces from a syntax tree.
//!
//! `DependencyExtractor` is a `swc_ecma_visit` visitor. It can be driven in two ways:
//!
//! - `DependencyExtractor::extract(&program)` walks a whole tree and returns an
//!   immutable `ExtractionResult`.
//! - `visit_call()` classifies a single call node, for callers that run their own
//!   traversal and interleave other per-node analyses. Call `finish()` afterwards.
//!
//! Classification never fails. Calls with an unrelated callee, no argument, a spread
//! argument or a non-string first argument are skipped without side effects.

use std::collections::BTreeSet;

use serde::Serialize;
use swc_ecma_ast::{CallExpr, Callee, Expr, Lit};
use swc_ecma_visit::{Visit, VisitWith};

use super::qualified_name::qualified_name;

/// Qualified callee name that declares a namespace.
pub const PROVIDE_CALLEE: &str = "goog.provide";

/// Qualified callee name that depends on a namespace.
pub const REQUIRE_CALLEE: &str = "goog.require";

/// Which set a recognized call contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    /// `goog.provide("ns")`
    Provide,
    /// `goog.require("ns")`
    Require,
}

impl DependencyKind {
    /// Classify a qualified callee name. Matching is exact.
    pub fn from_callee_name(name: &str) -> Option<Self> {
        match name {
            PROVIDE_CALLEE => Some(Self::Provide),
            REQUIRE_CALLEE => Some(Self::Require),
            _ => None,
        }
    }
}

/// Namespaces declared and required by one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub provides: BTreeSet<String>,
    pub requires: BTreeSet<String>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.provides.is_empty() && self.requires.is_empty()
    }
}

/// Classify a call expression.
///
/// Returns the dependency kind and the namespace string when the callee is exactly
/// `goog.provide` or `goog.require` and the first argument is a string literal.
pub fn classify_call(call: &CallExpr) -> Option<(DependencyKind, &str)> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let kind = qualified_name(callee)
        .as_deref()
        .and_then(DependencyKind::from_callee_name)?;

    let first_arg = call.args.first()?;
    if first_arg.spread.is_some() {
        return None;
    }

    match &*first_arg.expr {
        // Lone surrogates have no UTF-8 form and cannot be a namespace.
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|namespace| (kind, namespace)),
        _ => None,
    }
}

/// Collects `provides` and `requires` while visiting a syntax tree.
///
/// Each traversal owns its extractor; results are never shared across files.
#[derive(Debug, Default)]
pub struct DependencyExtractor {
    provides: BTreeSet<String>,
    requires: BTreeSet<String>,
}

impl DependencyExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `root` depth-first and return everything found.
    ///
    /// `root` may be a `Program`, `Module`, `Script` or any sub-tree.
    pub fn extract<N: VisitWith<Self>>(root: &N) -> ExtractionResult {
        let mut extractor = Self::new();
        root.visit_with(&mut extractor);
        extractor.finish()
    }

    /// Inspect one call node. Adds at most one namespace to one of the two sets.
    ///
    /// Does not descend into the call's children; `extract` handles nesting.
    pub fn visit_call(&mut self, call: &CallExpr) {
        let Some((kind, namespace)) = classify_call(call) else {
            return;
        };
        let set = match kind {
            DependencyKind::Provide => &mut self.provides,
            DependencyKind::Require => &mut self.requires,
        };
        if !set.contains(namespace) {
            set.insert(namespace.to_string());
        }
    }

    pub fn provides(&self) -> &BTreeSet<String> {
        &self.provides
    }

    pub fn requires(&self) -> &BTreeSet<String> {
        &self.requires
    }

    pub fn finish(self) -> ExtractionResult {
        ExtractionResult {
            provides: self.provides,
            requires: self.requires,
        }
    }
}

impl Visit for DependencyExtractor {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.visit_call(node);
        node.visit_children_with(self);
    }
}
