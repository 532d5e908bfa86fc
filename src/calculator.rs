// インスタンス不要の整数演算。オーバーフローはラップアラウンド
#[derive(Debug, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn add(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_add(rhs)
    }

    pub fn mult(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_mul(rhs)
    }

    pub fn sub(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_sub(rhs)
    }
}
