//! 회원 리포지토리

pub mod member_repo;
