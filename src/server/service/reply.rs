//! User-facing message texts.
//!
//! All replies are written in the operator's language (Japanese) and never include
//! error details or internal identifiers.

use crate::server::model::command::{SetupResult, StatusResult};

pub const PERMISSION_DENIED: &str = "このコマンドは管理者のみ使用できます。";
pub const NOT_CONFIGURED: &str = "⚠️ このサーバーではまだ設定されていません。";
pub const GUILD_ONLY: &str = "⚠️ このコマンドはサーバー内でのみ使用できます。";
pub const UNKNOWN_COMMAND: &str = "⚠️ 不明なコマンドです。";
pub const INVALID_OPTIONS: &str = "⚠️ チャンネルとロールを指定してください。";
pub const CHANNEL_NOT_FOUND: &str = "（チャンネルが見つかりません）";
pub const ROLE_NOT_FOUND: &str = "（ロールが見つかりません）";
pub const NOT_PERSISTED: &str = "⚠️ 設定ファイルへの保存に失敗しました。再起動すると設定は失われます。";

/// Heartbeat posted to the logging channel before a scheduled restart.
pub const RESTART_NOTICE: &str = "💤 Daily restart for health check";

/// Maximum number of characters of diagnostic text forwarded to the logging channel.
pub const DIAGNOSTIC_MAX_CHARS: usize = 1900;

/// Reply to a `setup` invocation.
pub fn setup_reply(result: &SetupResult, channel_name: &str, role_name: &str) -> String {
    let confirmation = format!(
        "✅ 設定完了：\n- 監視チャンネル：#{}\n- 許可ロール：@{}",
        channel_name, role_name
    );

    match result {
        SetupResult::Denied => PERMISSION_DENIED.to_string(),
        SetupResult::Saved => confirmation,
        SetupResult::SavedUnpersisted => format!("{}\n{}", confirmation, NOT_PERSISTED),
    }
}

/// Reply to a `status` invocation, substituting placeholders for unresolved entities.
pub fn status_reply(result: &StatusResult) -> String {
    match result {
        StatusResult::NotConfigured => NOT_CONFIGURED.to_string(),
        StatusResult::Configured {
            channel_name,
            role_name,
        } => {
            let channel = channel_name
                .as_ref()
                .map(|name| format!("#{}", name))
                .unwrap_or_else(|| CHANNEL_NOT_FOUND.to_string());
            let role = role_name
                .as_ref()
                .map(|name| format!("@{}", name))
                .unwrap_or_else(|| ROLE_NOT_FOUND.to_string());

            format!(
                "📊 現在の設定：\n- 監視チャンネル: {}\n- 許可ロール: {}",
                channel, role
            )
        }
    }
}

/// Direct message sent to an author whose post was removed.
///
/// `channel` is either `#name` or a channel mention.
pub fn warning_message(channel: &str) -> String {
    format!("⚠️ あなたは「{}」での発言権限がありません。", channel)
}
