//! # 栅格转矢量模块
//!
//! ## 设计思路
//!
//! 将 RGBA 像素网格转换为自包含的 SVG 文档：
//! 白色背景矩形在前，所有深色像素合并进同一条黑色路径在后。
//! 文档坐标系与像素网格一一对应（1 像素 = 1 单位），不做缩放。
//!
//! ## 实现思路
//!
//! 1. 输出 XML 声明与 `<svg>` 头（`viewBox` / `width` / `height` 均为 `size`）
//! 2. 输出覆盖整个画布的白色矩形
//! 3. 行优先遍历像素，RGB 三通道均 `< 128` 视为前景（忽略 alpha）
//! 4. 按路径策略追加子路径：逐像素单位方块，或按行合并连续像素
//! 5. 闭合 `<path>` 与 `<svg>`
//!
//! 纯函数，无 I/O、无共享状态，时间与空间复杂度均为 `O(size²)`。
//! 缓冲短于 `size² × 4` 时只遍历缓冲覆盖到的行，工作量受缓冲长度约束。

use std::fmt::Write as _;

use super::config::DARK_CHANNEL_THRESHOLD;
use super::source::PixelBuffer;
use super::PathStrategy;

/// 判断一个像素是否为前景（深色）。
#[inline]
pub fn is_foreground(r: u8, g: u8, b: u8) -> bool {
    r < DARK_CHANNEL_THRESHOLD && g < DARK_CHANNEL_THRESHOLD && b < DARK_CHANNEL_THRESHOLD
}

/// 将已校验的像素缓冲转换为 SVG 文档。
pub fn vectorize(buffer: &PixelBuffer, strategy: PathStrategy) -> String {
    let size = buffer.size();
    let path = match strategy {
        PathStrategy::UnitSquares => unit_square_path(buffer.as_bytes(), size),
        PathStrategy::MergedRuns => merged_run_path(buffer.as_bytes(), size),
    };
    wrap_document(size, &path)
}

/// 逐像素转换，不校验缓冲长度。
///
/// 只读取完整落在 `data` 内的像素；缓冲不足时前景被截断，不会越界。
/// 需要严格长度校验时使用 [`PixelBuffer::new`] + [`vectorize`]。
pub fn canvas_to_svg(data: &[u8], size: u32) -> String {
    wrap_document(size, &unit_square_path(data, size))
}

fn wrap_document(size: u32, path: &str) -> String {
    let mut svg = String::with_capacity(path.len() + 256);
    let _ = write!(
        svg,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {size} {size}\" width=\"{size}\" height=\"{size}\">\n  \
         <rect width=\"{size}\" height=\"{size}\" fill=\"#ffffff\"/>\n  \
         <path d=\""
    );
    svg.push_str(path);
    svg.push_str("\" fill=\"#000000\"/>\n</svg>");
    svg
}

/// 缓冲中至少含有一个字节的行数，超出的行全部视为背景。
#[inline]
fn rows_in(data: &[u8], size: u32) -> u32 {
    let row_bytes = size as usize * 4;
    if row_bytes == 0 {
        return 0;
    }
    data.len().div_ceil(row_bytes).min(size as usize) as u32
}

/// 读取 `(x, y)` 处像素的前景判定，越界视为背景。
#[inline]
fn foreground_at(data: &[u8], size: u32, x: u32, y: u32) -> bool {
    let idx = (y as usize * size as usize + x as usize) * 4;
    match data.get(idx..idx + 4) {
        Some(px) => is_foreground(px[0], px[1], px[2]),
        None => false,
    }
}

fn unit_square_path(data: &[u8], size: u32) -> String {
    let mut path = String::new();
    for y in 0..rows_in(data, size) {
        for x in 0..size {
            if foreground_at(data, size, x, y) {
                let _ = write!(path, "M{x},{y}h1v1h-1z");
            }
        }
    }
    path
}

fn merged_run_path(data: &[u8], size: u32) -> String {
    let mut path = String::new();
    for y in 0..rows_in(data, size) {
        let mut x = 0;
        while x < size {
            if !foreground_at(data, size, x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < size && foreground_at(data, size, x, y) {
                x += 1;
            }
            let run = x - start;
            let _ = write!(path, "M{start},{y}h{run}v1h-{run}z");
        }
    }
    path
}
