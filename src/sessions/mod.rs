/*!
 * Session directory
 *
 * Responsibility:
 * - token → User の読み取り専用インターフェース (SessionDirectory)
 * - 認証側 (login/logout) が所有する in-memory 実装
 *
 * Public API:
 * - SessionDirectory
 * - InMemorySessionDirectory
 * - User
 */

mod directory;
mod memory;
mod types;

pub use directory::SessionDirectory;
pub use memory::InMemorySessionDirectory;
pub use types::User;
