#[cfg(test)]
mod tests {
    use crate::calculator::Calculator;
    use proptest::prelude::*;

    #[test]
    fn test_demo_operands() {
        // 足し算
        assert_eq!(Calculator::add(8, 7), 15);

        // 掛け算
        assert_eq!(Calculator::mult(8, 7), 56);

        // 引き算
        assert_eq!(Calculator::sub(8, 7), 1);
    }

    #[test]
    fn test_negative_operands() {
        assert_eq!(Calculator::add(-8, 7), -1);
        assert_eq!(Calculator::mult(-8, -7), 56);
        assert_eq!(Calculator::sub(7, 8), -1);
        assert_eq!(Calculator::sub(0, 5), -5);
    }

    #[test]
    fn test_overflow_wraps() {
        // オーバーフローは検出せずラップアラウンド
        assert_eq!(Calculator::add(i32::MAX, 1), i32::MIN);
        assert_eq!(Calculator::sub(i32::MIN, 1), i32::MAX);
        assert_eq!(Calculator::mult(i32::MAX, 2), -2);
    }

    proptest! {
        #[test]
        fn prop_matches_native_arithmetic(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(Calculator::add(a, b), a.wrapping_add(b));
            prop_assert_eq!(Calculator::mult(a, b), a.wrapping_mul(b));
            prop_assert_eq!(Calculator::sub(a, b), a.wrapping_sub(b));
        }

        #[test]
        fn prop_add_and_mult_commute(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(Calculator::add(a, b), Calculator::add(b, a));
            prop_assert_eq!(Calculator::mult(a, b), Calculator::mult(b, a));
        }

        #[test]
        fn prop_sub_antisymmetric(a in any::<i32>(), b in any::<i32>()) {
            let diff = Calculator::sub(b, a);
            if let Some(neg) = diff.checked_neg() {
                prop_assert_eq!(Calculator::sub(a, b), neg);
            }
        }
    }
}
