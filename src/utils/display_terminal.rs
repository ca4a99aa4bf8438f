//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 부팅 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 등록 상태 등을 시각적으로 표현합니다.

pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

pub fn print_registered(name: &str) {
    println!("   ├─ 📦 {}: ✓ Registered", name);
}

pub fn print_registry_summary(components: usize) {
    println!("   🚀 Total Components: {}", components);
    println!();
}

/// 인덱스 생성 결과 한 줄
pub fn print_index_ready(collection: &str, index: &str) {
    println!("   ├─ 🗂  {}.{}: ✓ Ready", collection, index);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}
