use regex::Regex;
use std::sync::OnceLock;

use crate::domain::model::{Binding, Document, Layer, Param, Span};
use crate::utils::error::ParseError;

/// Behaviors that take no parameters. A `&`-token directly after one of
/// these always starts a new binding rather than nesting into it.
const ZERO_PARAM_BEHAVIORS: &[&str] = &[
    "&bootloader",
    "&caps_word",
    "&key_repeat",
    "&none",
    "&soft_off",
    "&studio_unlock",
    "&sys_reset",
    "&trans",
];

fn bindings_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Anchored so that e.g. `sensor-bindings = <...>` is left untouched.
    RE.get_or_init(|| Regex::new(r"(?:^|[\s{;])bindings\s*=\s*<").unwrap())
}

fn section_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_-]*)\s*\{").unwrap())
}

fn display_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"display-name\s*=\s*"([^"]*)""#).unwrap())
}

/// Extract all layers from a keymap document. Everything outside the
/// `bindings = < ... >` interiors is left to the caller untouched; layers
/// only record byte spans into the original text.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    let mut layers = Vec::new();

    for found in bindings_re().find_iter(source) {
        let interior_start = found.end();
        let (name, section_start) = enclosing_section(source, found.start());

        let rel_close = source[interior_start..]
            .find('>')
            .ok_or(ParseError::UnterminatedBlock {
                layer: name.clone(),
                offset: found.start(),
            })?;
        let interior_end = interior_start + rel_close;
        let interior = &source[interior_start..interior_end];

        let tokens = tokenize(interior, &name, interior_start)?;
        let bindings = parse_bindings(&tokens, &name)?;
        if bindings.is_empty() {
            return Err(ParseError::EmptyLayer { layer: name });
        }

        let layer_end = interior_end
            + source[interior_end..]
                .find('}')
                .unwrap_or(source.len() - interior_end);
        let display_name = display_name_re()
            .captures(&source[section_start..layer_end])
            .map(|caps| caps[1].to_string());

        layers.push(Layer {
            name,
            display_name,
            bindings,
            span: Span {
                start: interior_start,
                end: interior_end,
            },
            indent: first_line_indent(interior),
            closing_indent: closing_indent(interior),
        });
    }

    if layers.is_empty() {
        return Err(ParseError::NoLayers);
    }

    Ok(Document {
        source: source.to_string(),
        layers,
    })
}

/// Name of the innermost section header (`name {`) preceding the bindings
/// assignment, plus its starting offset for the display-name search window.
fn enclosing_section(source: &str, before: usize) -> (String, usize) {
    let mut name = "unnamed".to_string();
    let mut start = 0;
    for caps in section_re().captures_iter(&source[..before]) {
        let whole = caps.get(0).unwrap();
        name = caps[1].to_string();
        start = whole.start();
    }
    (name, start)
}

/// Leading whitespace of the first binding line, or `None` for inline blocks.
fn first_line_indent(interior: &str) -> Option<String> {
    if !interior.contains('\n') {
        return None;
    }
    interior
        .split('\n')
        .skip(1)
        .find(|line| !line.trim().is_empty())
        .map(|line| {
            line.chars()
                .take_while(|c| c.is_whitespace())
                .collect::<String>()
        })
}

/// Whitespace between the last newline and the closing `>`, when the `>`
/// sits on its own line.
fn closing_indent(interior: &str) -> String {
    match interior.rfind('\n') {
        Some(pos) => {
            let tail = &interior[pos + 1..];
            if tail.trim().is_empty() {
                tail.to_string()
            } else {
                String::new()
            }
        }
        None => String::new(),
    }
}

/// Whitespace-split the block interior into tokens, keeping parenthesized
/// groups such as `LC(LS(A))` atomic. Stray `,`/`;` separators between
/// bindings are tolerated and dropped.
fn tokenize(interior: &str, layer: &str, base_offset: usize) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for (i, ch) in interior.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                if depth == 0 {
                    return Err(ParseError::UnbalancedGroup {
                        layer: layer.to_string(),
                        offset: base_offset + i,
                    });
                }
                depth -= 1;
                current.push(ch);
            }
            c if depth == 0 && (c.is_whitespace() || c == ',' || c == ';') => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if depth != 0 {
        return Err(ParseError::UnbalancedGroup {
            layer: layer.to_string(),
            offset: base_offset + interior.len(),
        });
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Segment a flat token list into bindings. Each binding is a `&`-token
/// plus its parameters; a `&`-token seen while the current binding still
/// has no parameters becomes a nested binding parameter, so
/// `&hmr &caps_word RALT` stays one unit while `&trans &none` stays two.
fn parse_bindings(tokens: &[String], layer: &str) -> Result<Vec<Binding>, ParseError> {
    let mut bindings = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if !tokens[i].starts_with('&') {
            return Err(ParseError::UnexpectedToken {
                layer: layer.to_string(),
                token: tokens[i].clone(),
            });
        }
        bindings.push(parse_one(tokens, &mut i));
    }

    Ok(bindings)
}

fn parse_one(tokens: &[String], i: &mut usize) -> Binding {
    let mut binding = Binding::new(tokens[*i].clone());
    *i += 1;

    if ZERO_PARAM_BEHAVIORS.contains(&binding.behavior.as_str()) {
        return binding;
    }

    while *i < tokens.len() {
        if tokens[*i].starts_with('&') {
            if binding.params.is_empty() {
                let nested = parse_one(tokens, i);
                binding.params.push(Param::Binding(nested));
                continue;
            }
            break;
        }
        binding.params.push(Param::Leaf(tokens[*i].clone()));
        *i += 1;
    }

    binding
}
