//! The message compiler.

use std::collections::BTreeMap;
use std::sync::Arc;

use bon::Builder;

use crate::ast::{DateStyle, FormatSpec, Node};
use crate::compiler::error::{CompileError, compute_suggestions};
use crate::compiler::format::{Formatter, contains_unescaped_hash, unescape_hash};
use crate::compiler::pattern::{CompiledPattern, PatternPart};
use crate::intl::{
    DefaultProvider, FormatProvider, FormatStyles, NumberFormatFn, NumberOptions, PluralSelectFn,
    plural_select,
};
use crate::skeleton::SkeletonFormat;
use crate::types::Selector;

/// Compiles message trees into [`CompiledPattern`]s for a locale.
///
/// A compiler is configured once with a locale, style tables, and a format
/// provider, then reused across messages. Compilation is pure: two calls
/// with the same tree produce structurally identical patterns.
///
/// ```
/// use msgfmt::{Compiler, Node, PatternPart};
///
/// let message = Node::message(vec![
///     Node::text("Hello, "),
///     Node::argument("name"),
///     Node::text("!"),
/// ]);
///
/// let compiler = Compiler::builder().locale("en").build();
/// let pattern = compiler.compile(&message).unwrap();
/// assert_eq!(pattern.len(), 3);
/// assert!(matches!(pattern.parts()[1], PatternPart::Format(_)));
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Compiler {
    /// BCP 47 locale tag used for number, date, and plural resolution.
    #[builder(default = "en".to_string())]
    locale: String,
    /// Named style tables consulted when an argument names a style.
    #[builder(default)]
    formats: FormatStyles,
    /// Produces locale-bound formatting closures.
    #[builder(default = Arc::new(DefaultProvider) as Arc<dyn FormatProvider>)]
    provider: Arc<dyn FormatProvider>,
    /// Overrides the icu-backed plural category selector when set.
    plural_select: Option<PluralSelectFn>,
}

/// The innermost enclosing plural argument, threaded down through message
/// elements so literal text can resolve `#` markers. Select arguments pass
/// no scope to their branches, shadowing any outer plural.
struct PluralScope<'a> {
    id: &'a str,
    offset: i64,
}

/// Per-compile scratch state.
#[derive(Default)]
struct CompileState {
    /// Default number format for `#` substitution, built on first use.
    plural_number_format: Option<NumberFormatFn>,
}

impl Compiler {
    /// Compile a message tree into an ordered pattern.
    ///
    /// The root node must be a message; its elements must be text or
    /// arguments. Plural and select arguments are validated to carry an
    /// `other` option, and named styles are resolved against the style
    /// tables, so rendering a compiled pattern cannot fail.
    pub fn compile(&self, message: &Node) -> Result<CompiledPattern, CompileError> {
        let Node::Message(elements) = message else {
            return Err(CompileError::InvalidStructure {
                expected: "message",
                found: message.kind(),
            });
        };
        let mut state = CompileState::default();
        self.compile_message(elements, None, &mut state)
    }

    fn compile_message(
        &self,
        elements: &[Node],
        scope: Option<&PluralScope<'_>>,
        state: &mut CompileState,
    ) -> Result<CompiledPattern, CompileError> {
        let mut parts = Vec::with_capacity(elements.len());
        for element in elements {
            match element {
                Node::Text(text) => parts.push(self.compile_text(text, scope, state)),
                Node::Argument { id, spec } => parts.push(PatternPart::Format(
                    self.compile_argument(id, spec.as_ref(), state)?,
                )),
                Node::Message(_) => {
                    return Err(CompileError::InvalidStructure {
                        expected: "text or argument",
                        found: element.kind(),
                    });
                }
            }
        }
        Ok(CompiledPattern::new(parts))
    }

    /// Literal text inside a plural branch that mentions `#` becomes a
    /// deferred substitution bound to the enclosing plural's argument and
    /// offset. All other text is emitted verbatim, with `\#` unescaped.
    fn compile_text(
        &self,
        text: &str,
        scope: Option<&PluralScope<'_>>,
        state: &mut CompileState,
    ) -> PatternPart {
        if let Some(scope) = scope
            && contains_unescaped_hash(text)
        {
            return PatternPart::Format(Formatter::PluralOffsetText {
                id: scope.id.to_string(),
                offset: scope.offset,
                number_format: self.plural_number_format(state),
                text: text.to_string(),
            });
        }
        PatternPart::Literal(unescape_hash(text))
    }

    fn compile_argument(
        &self,
        id: &str,
        spec: Option<&FormatSpec>,
        state: &mut CompileState,
    ) -> Result<Formatter, CompileError> {
        let Some(spec) = spec else {
            return Ok(Formatter::String { id: id.to_string() });
        };
        match spec {
            FormatSpec::Number { style } => {
                let style = style.as_deref().unwrap_or("decimal");
                let options = lookup("number", style, &self.formats.number)?;
                Ok(Formatter::Number {
                    id: id.to_string(),
                    format: self.provider.number_format(&self.locale, options),
                })
            }
            FormatSpec::Date { style } => match style {
                DateStyle::Skeleton(skeleton) => Ok(Formatter::Skeleton {
                    id: id.to_string(),
                    format: SkeletonFormat::compile(skeleton, self.provider.as_ref(), &self.locale),
                }),
                DateStyle::Named(name) => {
                    let options = lookup("date", name, &self.formats.date)?;
                    Ok(Formatter::DateTime {
                        id: id.to_string(),
                        format: self.provider.date_time_format(&self.locale, options),
                    })
                }
            },
            FormatSpec::Time { style } => {
                let options = lookup("time", style, &self.formats.time)?;
                Ok(Formatter::DateTime {
                    id: id.to_string(),
                    format: self.provider.date_time_format(&self.locale, options),
                })
            }
            FormatSpec::Plural {
                kind,
                offset,
                options,
            } => {
                require_other("plural", id, options)?;
                let scope = PluralScope { id, offset: *offset };
                let options = self.compile_options(options, Some(&scope), state)?;
                Ok(Formatter::Plural {
                    id: id.to_string(),
                    kind: *kind,
                    offset: *offset,
                    options,
                    select: self.plural_fn(),
                })
            }
            FormatSpec::Select { options } => {
                require_other("select", id, options)?;
                let options = self.compile_options(options, None, state)?;
                Ok(Formatter::Select {
                    id: id.to_string(),
                    options,
                })
            }
        }
    }

    fn compile_options(
        &self,
        options: &[(Selector, Node)],
        scope: Option<&PluralScope<'_>>,
        state: &mut CompileState,
    ) -> Result<BTreeMap<Selector, CompiledPattern>, CompileError> {
        let mut compiled = BTreeMap::new();
        for (selector, body) in options {
            let Node::Message(elements) = body else {
                return Err(CompileError::InvalidStructure {
                    expected: "message",
                    found: body.kind(),
                });
            };
            let pattern = self.compile_message(elements, scope, state)?;
            compiled.insert(selector.clone(), pattern);
        }
        Ok(compiled)
    }

    fn plural_fn(&self) -> PluralSelectFn {
        self.plural_select
            .clone()
            .unwrap_or_else(|| plural_select(&self.locale))
    }

    fn plural_number_format(&self, state: &mut CompileState) -> NumberFormatFn {
        state
            .plural_number_format
            .get_or_insert_with(|| {
                self.provider
                    .number_format(&self.locale, &NumberOptions::default())
            })
            .clone()
    }
}

fn require_other(
    kind: &'static str,
    id: &str,
    options: &[(Selector, Node)],
) -> Result<(), CompileError> {
    if options.iter().any(|(selector, _)| selector.as_str() == "other") {
        Ok(())
    } else {
        Err(CompileError::MissingOtherOption {
            kind,
            argument: id.to_string(),
        })
    }
}

fn lookup<'a, T>(
    kind: &'static str,
    style: &str,
    table: &'a BTreeMap<String, T>,
) -> Result<&'a T, CompileError> {
    table.get(style).ok_or_else(|| {
        let available: Vec<String> = table.keys().cloned().collect();
        let suggestions = compute_suggestions(style, &available);
        CompileError::UnknownStyle {
            kind,
            style: style.to_string(),
            available,
            suggestions,
        }
    })
}
