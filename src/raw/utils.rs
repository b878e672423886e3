// Returns the smallest odd prime `>= n`.
//
// Even inputs are rounded up to the next odd number first, so `next_prime(2)`
// is 3. Table capacities never need to be 2.
pub fn next_prime(n: usize) -> usize {
    let mut n = if n % 2 == 0 {
        n.checked_add(1).expect("capacity overflow")
    } else {
        n
    };

    while !is_prime(n) {
        n = n.checked_add(2).expect("capacity overflow");
    }

    n
}

// Trial division by odd divisors up to `sqrt(n)`.
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }

    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }

    true
}
