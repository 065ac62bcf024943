//! Loader for `systemd-analyze dot` dependency dumps.
//!
//! The dump is a small subset of the DOT language:
//!
//! ```text
//! digraph systemd {
//! 	"sshd.service"->"network.target" [color="green"];
//! 	"sshd.service"->"sshd-keygen.target" [color="grey66"];
//! }
//! ```
//!
//! The relation of an edge comes from an explicit `relation="..."` attribute
//! when present, otherwise from the color code `systemd-analyze` uses (see
//! [`Relation::from_dot_color`]). Edge chains (`a -> b -> c`), node
//! statements and `key=value` statements are accepted. Attributes from an
//! `edge [...]` statement apply to every later edge, with the edge's own
//! attributes taking precedence; `graph [...]`, `node [...]` and `key=value`
//! statements are ignored.

use super::DependencyGraph;
use crate::domain::{Relation, UnitId};
use crate::error::{Error, Result};
use std::path::Path;
use winnow::{
    combinator::{alt, cut_err, delimited, fail, not, opt, preceded, repeat, terminated},
    error::{ContextError, ErrMode, StrContext, StrContextValue},
    prelude::*,
    token::{none_of, one_of, take_while},
};

/// Read and parse a DOT dump from `path`.
pub fn load_dot(path: &Path) -> Result<DependencyGraph> {
    let content = std::fs::read_to_string(path)?;
    let graph = parse_dot(&content)?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Loaded dependency graph"
    );
    Ok(graph)
}

/// Parse DOT text into a [`DependencyGraph`].
///
/// # Errors
///
/// Returns [`Error::Parse`] with the offending line number if the text is not
/// a directed graph in the supported subset.
pub fn parse_dot(input: &str) -> Result<DependencyGraph> {
    parse_graph.parse(input).map_err(|e| Error::Parse {
        line: line_at(input, e.offset()),
        message: e.inner().to_string().replace('\n', "; "),
    })
}

/// 1-based line number of byte `offset` in `source`.
fn line_at(source: &str, offset: usize) -> usize {
    source
        .get(..offset)
        .map_or(1, |before| before.matches('\n').count() + 1)
}

type Attributes = Vec<(String, String)>;

/// A parsed statement inside the graph body.
#[derive(Debug)]
enum Statement {
    /// `a -> b -> c [attrs]`
    Edge { chain: Vec<String>, attributes: Attributes },
    /// `a [attrs]`
    Node(String),
    /// `edge [attrs]`
    EdgeDefaults(Attributes),
    /// `graph [attrs]`, `node [attrs]`, `key=value`
    Ignored,
}

/// `['strict'] 'digraph' [ID] '{' stmt* '}'`
fn parse_graph(input: &mut &str) -> ModalResult<DependencyGraph> {
    let name = parse_header.parse_next(input)?;
    let mut graph = match name {
        Some(name) => DependencyGraph::with_name(name),
        None => DependencyGraph::new(),
    };
    let mut edge_defaults = Attributes::new();

    loop {
        let _: () = skip_whitespace_and_comments.parse_next(input)?;

        if opt('}').parse_next(input)?.is_some() {
            break;
        }
        if input.is_empty() {
            return cut_error(input, "graph body", "closing '}'");
        }
        if opt(';').parse_next(input)?.is_some() {
            continue;
        }

        let statement = cut_err(parse_statement)
            .context(StrContext::Label("statement"))
            .parse_next(input)?;
        match statement {
            Statement::Edge { chain, attributes } => {
                let mut merged = edge_defaults.clone();
                merged.extend(attributes);
                let relation = relation_from_attributes(&merged);
                for pair in chain.windows(2) {
                    if let [from, to] = pair {
                        tracing::trace!(from = %from, to = %to, ?relation, "edge");
                        graph.add_dependency(
                            UnitId::from(from.as_str()),
                            UnitId::from(to.as_str()),
                            relation.clone(),
                        );
                    }
                }
            }
            Statement::Node(id) => {
                graph.add_unit(UnitId::from(id));
            }
            Statement::EdgeDefaults(attributes) => edge_defaults.extend(attributes),
            Statement::Ignored => {}
        }
    }

    let _: () = skip_whitespace_and_comments.parse_next(input)?;
    if !input.is_empty() {
        return cut_error(input, "trailing input", "end of input after closing '}'");
    }
    Ok(graph)
}

/// Graph keyword, optional name and the opening brace.
fn parse_header(input: &mut &str) -> ModalResult<Option<String>> {
    let mut keyword = parse_id
        .context(StrContext::Label("graph header"))
        .parse_next(input)?;
    if keyword.eq_ignore_ascii_case("strict") {
        keyword = cut_err(parse_id)
            .context(StrContext::Label("graph header"))
            .parse_next(input)?;
    }
    if keyword.eq_ignore_ascii_case("graph") {
        return cut_error(input, "undirected graph", "'digraph'");
    }
    if !keyword.eq_ignore_ascii_case("digraph") {
        return cut_error(input, "graph header", "'digraph'");
    }

    let name = opt(parse_id).parse_next(input)?;
    let _: &str = cut_err(symbol("{"))
        .context(StrContext::Expected(StrContextValue::CharLiteral('{')))
        .parse_next(input)?;
    Ok(name)
}

fn parse_statement(input: &mut &str) -> ModalResult<Statement> {
    let first = parse_id.parse_next(input)?;

    if matches!(first.as_str(), "graph" | "node" | "edge") {
        if let Some(attributes) = opt(parse_attributes).parse_next(input)? {
            let _: Option<&str> = opt(symbol(";")).parse_next(input)?;
            return Ok(if first == "edge" {
                Statement::EdgeDefaults(attributes)
            } else {
                Statement::Ignored
            });
        }
    }

    if opt(symbol("=")).parse_next(input)?.is_some() {
        let _: String = cut_err(parse_id)
            .context(StrContext::Label("attribute value"))
            .parse_next(input)?;
        let _: Option<&str> = opt(symbol(";")).parse_next(input)?;
        return Ok(Statement::Ignored);
    }

    if opt(symbol("--")).parse_next(input)?.is_some() {
        return cut_error(input, "'--' edge in a digraph", "'->'");
    }

    let targets: Vec<String> = repeat(
        0..,
        preceded(
            symbol("->"),
            cut_err(parse_id).context(StrContext::Label("edge target")),
        ),
    )
    .parse_next(input)?;
    let attributes = opt(parse_attributes).parse_next(input)?.unwrap_or_default();
    let _: Option<&str> = opt(symbol(";")).parse_next(input)?;

    if targets.is_empty() {
        return Ok(Statement::Node(first));
    }
    let mut chain = Vec::with_capacity(targets.len() + 1);
    chain.push(first);
    chain.extend(targets);
    Ok(Statement::Edge { chain, attributes })
}

/// `'[' (ID '=' ID [',' | ';'])* ']'`
fn parse_attributes(input: &mut &str) -> ModalResult<Attributes> {
    delimited(
        symbol("["),
        repeat(
            0..,
            terminated(parse_attribute, opt(alt((symbol(","), symbol(";"))))),
        ),
        cut_err(symbol("]")).context(StrContext::Expected(StrContextValue::CharLiteral(']'))),
    )
    .parse_next(input)
}

fn parse_attribute(input: &mut &str) -> ModalResult<(String, String)> {
    let key = parse_id.parse_next(input)?;
    let _: &str = cut_err(symbol("="))
        .context(StrContext::Expected(StrContextValue::CharLiteral('=')))
        .parse_next(input)?;
    let value = cut_err(parse_id)
        .context(StrContext::Label("attribute value"))
        .parse_next(input)?;
    Ok((key, value))
}

/// Quoted or bare identifier, after any leading whitespace.
fn parse_id(input: &mut &str) -> ModalResult<String> {
    preceded(
        skip_whitespace_and_comments,
        alt((parse_quoted_id, parse_bare_id.map(str::to_owned))),
    )
    .parse_next(input)
}

/// `"..."` with `\"` escapes; may not span lines.
fn parse_quoted_id(input: &mut &str) -> ModalResult<String> {
    let _: char = '"'.parse_next(input)?;
    let value: String = repeat(0.., alt(("\\\"".value('"'), none_of(['"', '\n']))))
        .parse_next(input)?;
    let _: char = cut_err('"')
        .context(StrContext::Label("quoted identifier"))
        .context(StrContext::Expected(StrContextValue::Description(
            "closing quote",
        )))
        .parse_next(input)?;
    Ok(value)
}

/// Unit names, numbers and keywords. A `-` belongs to the identifier unless
/// it starts an edge operator.
fn parse_bare_id<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    repeat::<_, _, (), _, _>(
        1..,
        alt((
            take_while(1.., is_bare_id_char),
            terminated("-", not(one_of(['>', '-']))),
        )),
    )
    .take()
    .parse_next(input)
}

fn is_bare_id_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '@' | ':' | '\\')
}

/// A literal token after any leading whitespace.
fn symbol<'i>(token: &'static str) -> impl Parser<&'i str, &'i str, ErrMode<ContextError>> {
    preceded(skip_whitespace_and_comments, token)
}

/// Skip whitespace, `//` comments and `#` lines.
fn skip_whitespace_and_comments(input: &mut &str) -> ModalResult<()> {
    loop {
        let before = *input;

        let _: &str = take_while(0.., |c: char| c.is_whitespace()).parse_next(input)?;

        if input.starts_with("//") || input.starts_with('#') {
            let _: &str = take_while(0.., |c: char| c != '\n').parse_next(input)?;
            continue;
        }

        if *input == before {
            break;
        }
    }
    Ok(())
}

/// Fail without backtracking, labelled for the error message.
fn cut_error<O>(
    input: &mut &str,
    label: &'static str,
    expected: &'static str,
) -> ModalResult<O> {
    cut_err(fail::<_, O, _>)
        .context(StrContext::Label(label))
        .context(StrContext::Expected(StrContextValue::Description(expected)))
        .parse_next(input)
}

fn relation_from_attributes(attributes: &[(String, String)]) -> Option<Relation> {
    let lookup = |name: &str| {
        attributes
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };

    if let Some(relation) = lookup("relation") {
        return relation.parse().ok();
    }
    lookup("color").and_then(Relation::from_dot_color)
}
