use std::{path::Path, sync::Arc};

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap, Spanned};
use swc_ecma_ast::Program;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// Pick the parser syntax from a file extension.
///
/// Plain `.js` files are parsed without JSX so `a < b > c` in legacy code is
/// never read as an element.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax::default()),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        Some("jsx") => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax::default()),
    }
}

/// Parse JavaScript/TypeScript source code into a `Program`.
///
/// Closure Library files are usually scripts, so this parses a program and lets
/// swc decide between script and module. Only fatal errors are reported;
/// recoverable errors are dropped.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_js_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<Program> {
    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        parser.parse_program().map_err(|e| {
            let loc = source_map.lookup_char_pos(e.span().lo);
            anyhow!(
                "{}:{}:{}: {}",
                file_path,
                loc.line,
                loc.col_display + 1,
                e.kind().msg()
            )
        })
    })
}
