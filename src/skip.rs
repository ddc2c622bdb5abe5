//! 条件块 `{...}` 的删除。
//!
//! 替换完成后，内容以跳过标记结尾的最内层块会被整体删除（含花括号）；删除后外层块
//! 可能成为新的最内层块，继续按同样规则判断。剩余的 `{`、`}` 作为普通分隔符去掉，
//! 块内容保留。

use crate::value::SKIP_MARKER;

struct OpenBlock {
    /// `{` 在输出中的位置。
    start: usize,
    kept_child: bool,
}

/// 删除被跳过的条件块，并去掉剩余的花括号。
pub fn remove_skipped_blocks(text: &str) -> String {
    remove_counted(text).0
}

/// 同 [`remove_skipped_blocks`]，额外返回删除的块数。
pub(crate) fn remove_counted(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut stack: Vec<OpenBlock> = Vec::new();
    let mut removed = 0usize;

    for c in text.chars() {
        match c {
            '{' => {
                stack.push(OpenBlock {
                    start: out.len(),
                    kept_child: false,
                });
                out.push('{');
            }
            '}' => {
                let Some(block) = stack.pop() else {
                    out.push('}');
                    continue;
                };
                let content = &out[block.start + 1..];
                if !block.kept_child && content.ends_with(SKIP_MARKER) {
                    out.truncate(block.start);
                    removed += 1;
                } else {
                    out.push('}');
                    if let Some(parent) = stack.last_mut() {
                        parent.kept_child = true;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out.retain(|c| c != '{' && c != '}');
    (out, removed)
}
