//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 시작 요약 등을 시각적으로 표현합니다.

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// 텍스트는 가운데 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                RENEX EDGE SERVICE                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        width = BOX_WIDTH
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Loading configuration
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 처리된 항목 수와 함께 표시합니다
///
/// ```text
/// ✓ Step 1: Configuration loaded (2 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 트리 형태로 표시합니다
///
/// ```text
///    ├─ Network: testnet
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서버 시작 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               🎉 EDGE SERVICE READY              ║
/// ╚══════════════════════════════════════════════════╝
///    🌐 Listening: 0.0.0.0:3000
///    🔗 Network: testnet
/// ```
pub fn print_startup_summary(bind_address: &str, network: &str) {
    println!();
    print_boxed_title("🎉 EDGE SERVICE READY");
    println!("   🌐 Listening: {}", bind_address);
    println!("   🔗 Network: {}", network);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_centers_text() {
        let boxed = boxed_title("READY");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), BOX_WIDTH + 2);
        assert_eq!(lines[1].chars().count(), BOX_WIDTH + 2);
        assert!(lines[1].starts_with("║ "));
        assert!(lines[1].contains("READY"));
    }
}
