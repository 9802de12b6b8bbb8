// Integer math helpers

/// n!, or `None` if it does not fit in a u64
pub fn factorial(n: u32) -> Option<u64> {
    (2..=u64::from(n)).try_fold(1u64, |acc, i| acc.checked_mul(i))
}

/// n-th Fibonacci number (F(0) = 0), or `None` on overflow
pub fn fibonacci(n: u32) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }

    let (mut a, mut b) = (0u64, 1u64);
    for _ in 1..n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}

/// Trial division over 6k +/- 1
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5i64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Greatest common divisor of the absolute values
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; 0 if either input is 0, `None` on overflow
pub fn lcm(a: i64, b: i64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a.unsigned_abs() / gcd(a, b)).checked_mul(b.unsigned_abs())
}

/// base^exponent; a negative exponent inverts the base
pub fn power(base: f64, exponent: i32) -> f64 {
    base.powi(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(7), Some(5040));
        assert_eq!(factorial(15), Some(1_307_674_368_000));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(0), Some(0));
        assert_eq!(fibonacci(1), Some(1));
        assert_eq!(fibonacci(12), Some(144));
        assert_eq!(fibonacci(25), Some(75025));
        assert_eq!(fibonacci(93), Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci(94), None);
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<i64> = (-5..30).filter(|n| is_prime(*n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(56, 98), 14);
        assert_eq!(gcd(-56, 98), 14);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(15, 25), Some(75));
        assert_eq!(lcm(-4, 6), Some(12));
        assert_eq!(lcm(0, 9), Some(0));
        assert_eq!(lcm(i64::MAX, i64::MAX - 1), None);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.5, 3), 15.625);
        assert_eq!(power(2.0, -2), 0.25);
        assert_eq!(power(9.0, 0), 1.0);
    }
}
