//! # URL 二维码生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  CLI (main.rs, clap)                     │
//! │   参数解析 ── 设置加载 ── 生成 ── 落盘 / Data URI / 剪贴板 │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↕ Result<T, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕            库 (qr_generator)                      │
//! │                                                          │
//! │  ┌─ error ────── AppError (统一错误类型)                  │
//! │  │                                                       │
//! │  ├─ qr_handler    校验·编码·栅格化·PNG/SVG 输出           │
//! │  │   └─ vectorize 像素网格 → SVG 路径                     │
//! │  │                                                       │
//! │  ├─ settings      默认尺寸/格式/目录 (JSON)               │
//! │  ├─ storage       输出目录与文件写入                      │
//! │  └─ clipboard     复制 URL 文本                           │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`qr_handler`] | 从 URL 生成 PNG / SVG 二维码及其 Data URI |
//! | [`settings`] | 用户默认设置的读取与保存 |
//! | [`storage`] | 输出目录的解析、自动创建与文件写入 |
//! | [`clipboard`] | 写入系统剪贴板 |

pub mod error;
pub mod clipboard;
pub mod qr_handler;
pub mod settings;
pub mod storage;
