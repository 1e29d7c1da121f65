/// Translates a strftime-style pattern into chrono's formatting dialect.
///
/// Most tokens exist in both dialects and map to themselves. The dates being
/// formatted are naive midnight timestamps, so the zone tokens degrade to the
/// fixed `UTC`/`+0000` a zone-less date renders, and `%U`/`%W` degrade to a
/// literal `00` (week numbers were never computed upstream). Unrecognized
/// tokens come out as literal text; this function never fails.
pub fn convert_format(format: &str) -> String {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(token) => match translate(token) {
                Some(mapped) => out.push_str(mapped),
                None => {
                    // Escaped so chrono prints the token verbatim instead of
                    // choking on an unknown specifier.
                    out.push_str("%%");
                    out.push(token);
                }
            },
            // Trailing bare '%' renders as itself.
            None => out.push_str("%%"),
        }
    }
    out
}

/// One whole token at a time, so `%y` can never corrupt a later `%Y`.
fn translate(token: char) -> Option<&'static str> {
    Some(match token {
        'Y' => "%Y",
        'y' => "%y",
        'm' => "%m",
        'd' => "%d",
        'H' => "%H",
        'M' => "%M",
        'S' => "%S",
        'B' => "%B",
        'b' => "%b",
        'A' => "%A",
        'a' => "%a",
        'j' => "%j",
        'w' => "%w",
        'U' | 'W' => "00",
        'x' => "%m/%d/%y",
        'X' => "%H:%M:%S",
        'c' => "%a %b %d %H:%M:%S %Y",
        'Z' => "UTC",
        'z' => "+0000",
        '%' => "%%",
        _ => return None,
    })
}
