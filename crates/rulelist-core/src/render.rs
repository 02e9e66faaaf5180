//! 列表字面量输出
use std::borrow::Cow;
use std::io::Write;

/// 转义规则字符串，使其包裹单引号后仍是合法的字面量
/// `\` → `\\`，`'` → `\'`，换行/回车 → `\n`/`\r`，其余字符原样保留
pub fn escape_rule(rule: &str) -> Cow<'_, str> {
    if !rule.contains(['\\', '\'', '\n', '\r']) {
        return Cow::Borrowed(rule);
    }
    let mut out = String::with_capacity(rule.len() + 8);
    for c in rule.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// 输出格式：`[` 独占一行，每条规则一行 `'<rule>',`，最后 `]` 独占一行
pub fn render_rule_list<S: AsRef<str>>(out: &mut dyn Write, rules: &[S]) -> std::io::Result<()> {
    writeln!(out, "[")?;
    for rule in rules {
        writeln!(out, "'{}',", escape_rule(rule.as_ref()))?;
    }
    writeln!(out, "]")?;
    Ok(())
}
