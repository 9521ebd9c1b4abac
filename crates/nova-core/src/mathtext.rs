// File: crates/nova-core/src/mathtext.rs
// Summary: Converts `$...$` TeX-like math segments into plain Unicode text for labels.

use std::iter::Peekable;
use std::str::Chars;

const SUPERSCRIPTS: [(char, char); 18] = [
    ('0', '⁰'), ('1', '¹'), ('2', '²'), ('3', '³'), ('4', '⁴'), ('5', '⁵'), ('6', '⁶'),
    ('7', '⁷'), ('8', '⁸'), ('9', '⁹'), ('+', '⁺'), ('-', '⁻'), ('=', '⁼'), ('(', '⁽'),
    (')', '⁾'), ('n', 'ⁿ'), ('i', 'ⁱ'), ('−', '⁻'),
];

const SUBSCRIPTS: [(char, char); 21] = [
    ('0', '₀'), ('1', '₁'), ('2', '₂'), ('3', '₃'), ('4', '₄'), ('5', '₅'), ('6', '₆'),
    ('7', '₇'), ('8', '₈'), ('9', '₉'), ('+', '₊'), ('-', '₋'), ('=', '₌'), ('(', '₍'),
    (')', '₎'), ('a', 'ₐ'), ('e', 'ₑ'), ('o', 'ₒ'), ('x', 'ₓ'), ('i', 'ᵢ'),
    ('−', '₋'),
];

fn map_script(s: &str, table: &[(char, char)]) -> Option<String> {
    s.chars().map(|c| table.iter().find(|(from, _)| *from == c).map(|(_, to)| *to)).collect()
}

/// Superscript form of `s`; characters without a superscript glyph are kept as-is.
pub fn superscript(s: &str) -> String {
    s.chars().map(|c| map_script(&c.to_string(), &SUPERSCRIPTS).unwrap_or_else(|| c.to_string())).collect()
}

fn symbol(name: &str) -> Option<&'static str> {
    Some(match name {
        "alpha" => "α", "beta" => "β", "gamma" => "γ", "delta" => "δ", "epsilon" => "ε",
        "varepsilon" => "ε", "zeta" => "ζ", "eta" => "η", "theta" => "θ", "iota" => "ι",
        "kappa" => "κ", "lambda" => "λ", "mu" => "μ", "nu" => "ν", "xi" => "ξ", "pi" => "π",
        "rho" => "ρ", "sigma" => "σ", "tau" => "τ", "upsilon" => "υ", "phi" => "φ",
        "varphi" => "φ", "chi" => "χ", "psi" => "ψ", "omega" => "ω",
        "Gamma" => "Γ", "Delta" => "Δ", "Theta" => "Θ", "Lambda" => "Λ", "Xi" => "Ξ",
        "Pi" => "Π", "Sigma" => "Σ", "Upsilon" => "Υ", "Phi" => "Φ", "Psi" => "Ψ",
        "Omega" => "Ω",
        "cdot" => "·", "times" => "×", "pm" => "±", "mp" => "∓", "infty" => "∞",
        "sqrt" => "√", "approx" => "≈", "leq" => "≤", "geq" => "≥", "neq" => "≠",
        "partial" => "∂", "nabla" => "∇", "sum" => "Σ", "int" => "∫", "degree" => "°",
        "circ" => "°", "rightarrow" => "→", "to" => "→", "ell" => "ℓ", "hbar" => "ħ",
        "AA" => "Å", "quad" | "qquad" => " ",
        _ => return None,
    })
}

/// Read one argument: a braced group or a single character/command.
fn read_group(it: &mut Peekable<Chars<'_>>) -> String {
    while it.peek() == Some(&' ') {
        it.next();
    }
    match it.peek() {
        Some('{') => {
            it.next();
            parse_math(it, true)
        }
        Some('\\') => {
            it.next();
            command(it)
        }
        Some(_) => it.next().map(|c| c.to_string()).unwrap_or_default(),
        None => String::new(),
    }
}

fn command(it: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&c) = it.peek() {
        if c.is_ascii_alphabetic() {
            name.push(c);
            it.next();
        } else {
            break;
        }
    }
    if name.is_empty() {
        // escaped character such as \$ or \%
        return it.next().map(|c| c.to_string()).unwrap_or_default();
    }
    match name.as_str() {
        "mathrm" | "mathit" | "mathbf" | "mathsf" | "text" | "textrm" | "operatorname" => read_group(it),
        "frac" => {
            let num = read_group(it);
            let den = read_group(it);
            format!("{num}/{den}")
        }
        "left" | "right" | "big" | "Big" => String::new(),
        other => symbol(other).map(str::to_string).unwrap_or(name),
    }
}

fn script(content: String, table: &[(char, char)], marker: char) -> String {
    match map_script(&content, table) {
        Some(s) => s,
        None if content.chars().count() == 1 => format!("{marker}{content}"),
        None => format!("{marker}({content})"),
    }
}

fn parse_math(it: &mut Peekable<Chars<'_>>, in_group: bool) -> String {
    let mut out = String::new();
    while let Some(c) = it.next() {
        match c {
            '}' if in_group => return out,
            '{' => out.push_str(&parse_math(it, true)),
            '\\' => out.push_str(&command(it)),
            '^' => out.push_str(&script(read_group(it), &SUPERSCRIPTS, '^')),
            '_' => out.push_str(&script(read_group(it), &SUBSCRIPTS, '_')),
            ' ' => {}
            '-' => out.push('−'),
            other => out.push(other),
        }
    }
    out
}

/// Convert every `$...$` segment of `text` to plain Unicode; text outside math is kept.
/// An unmatched `$` is printed literally.
pub fn to_plain(text: &str) -> String {
    if !text.contains('$') {
        return text.to_string();
    }
    let mut out = String::new();
    let mut rest = text;
    while let Some(start) = rest.find('$') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('$') {
            Some(end) => {
                let mut it = after[..end].chars().peekable();
                out.push_str(&parse_math(&mut it, false));
                rest = &after[end + 1..];
            }
            None => {
                out.push('$');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
