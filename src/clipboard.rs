//! 将 URL 文本写入系统剪贴板（对应页面上的 “Copy URL” 按钮）。

use crate::error::AppError;

/// 写入纯文本到剪贴板。
pub fn copy_text(text: &str) -> Result<(), AppError> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| AppError::Clipboard(e.to_string()))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| AppError::Clipboard(e.to_string()))?;

    log::info!("📋 已复制到剪贴板（{} 字符）", text.chars().count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "requires system clipboard access"]
    fn copy_text_round_trips_through_clipboard() {
        copy_text("https://example.com").expect("clipboard write should succeed");

        let mut clipboard = arboard::Clipboard::new().unwrap();
        assert_eq!(clipboard.get_text().unwrap(), "https://example.com");
    }
}
