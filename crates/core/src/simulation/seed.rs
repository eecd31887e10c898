//! Per-trial seed derivation, so every trial draws from its own stream.

pub fn trial_seed(base_seed: u64, trial: u64) -> u64 {
    let mut mixed = base_seed ^ trial.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}
