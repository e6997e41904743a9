use std::io::Write;

use crate::generator::{Generation, Result};

/// Quote a string the way a list literal would show it: single quotes unless
/// the string holds a `'` and no `"`, with backslashes and control
/// characters escaped.
pub fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

/// Write `items` as one `[...]` line.
pub fn write_list<W, I, S>(w: &mut W, items: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    w.write_all(b"[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            w.write_all(b", ")?;
        }
        w.write_all(quote(item.as_ref()).as_bytes())?;
    }
    w.write_all(b"]\n")
}

/// Write the survivors followed by the total line.
pub fn write_generation<W: Write>(w: &mut W, generation: &Generation) -> Result<()> {
    write_list(w, &generation.valid)?;
    writeln!(w, "Total valid combinations: {}", generation.count())?;
    w.flush()?;
    Ok(())
}
