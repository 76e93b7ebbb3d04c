#![allow(dead_code)]

// djb2: h = h*33 + c, starting from 5381. The accumulator is kept reduced
// mod nb at every step, which equals reducing the unbounded sum once at
// the end.
pub fn hash_key(key: &str, nb: i32) -> i32 {
    let nb = nb as u64;
    let mut h = 5381 % nb;
    for c in key.chars() {
        h = (h * 33 + c as u64) % nb;
    }
    h as i32
}

pub fn is_prime(n: i32) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let n = n as i64;
    let mut i: i64 = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

pub fn next_prime(n: i32) -> i32 {
    let mut n = if n % 2 == 0 { n + 1 } else { n };
    if n < 2 {
        n = 2;
    }
    while !is_prime(n) {
        n += 2;
    }
    n
}

// smallest prime >= NR/FR + 1
pub fn num_buckets(nr: i32, fr: i32) -> i32 {
    next_prime(nr / fr + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_key_golden_values() {
        assert_eq!(hash_key("abc", 97), 63);
        assert_eq!(hash_key("hello", 7), 1);
        assert_eq!(hash_key("", 11), 5381 % 11);
    }

    #[test]
    fn hash_key_is_deterministic() {
        for _ in 0..10 {
            assert_eq!(hash_key("determinism", 101), hash_key("determinism", 101));
        }
    }

    #[test]
    fn hash_key_stays_in_range() {
        for nb in [1, 2, 7, 97, 1009] {
            for key in ["", "a", "ana", "overflow", "ração"] {
                let h = hash_key(key, nb);
                assert!(0 <= h && h < nb, "key={} nb={} h={}", key, nb, h);
            }
        }
    }

    #[test]
    fn is_prime_small_values() {
        let primes = [2, 3, 5, 7, 11, 13, 97, 101];
        let composites = [-7, 0, 1, 4, 6, 9, 25, 91, 100];
        for p in primes {
            assert!(is_prime(p), "{} should be prime", p);
        }
        for c in composites {
            assert!(!is_prime(c), "{} should not be prime", c);
        }
    }

    #[test]
    fn next_prime_steps_to_the_next_odd_prime() {
        assert_eq!(next_prime(1), 2);
        assert_eq!(next_prime(2), 3);
        assert_eq!(next_prime(3), 3);
        assert_eq!(next_prime(4), 5);
        assert_eq!(next_prime(6), 7);
        assert_eq!(next_prime(8), 11);
        assert_eq!(next_prime(24), 29);
        assert_eq!(next_prime(90), 97);
        assert_eq!(next_prime(100), 101);
    }

    #[test]
    fn num_buckets_exceeds_nr_over_fr() {
        assert_eq!(num_buckets(5, 1), 7);
        assert_eq!(num_buckets(1000, 10), 101);
        assert_eq!(num_buckets(89, 1), 97);
        assert_eq!(num_buckets(0, 10), 2);
    }
}
