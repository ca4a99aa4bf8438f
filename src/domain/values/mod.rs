//! 검증된 값 객체
//!
//! 생성자가 인스턴스를 얻는 유일한 방법이며, 규칙을 어긴 입력은
//! `ValidationError`로 즉시 거부됩니다. 통과한 값은 원본 그대로 보존합니다.

pub mod user_name;
pub mod email;
pub mod password;

pub use user_name::UserName;
pub use email::Email;
pub use password::Password;
