use des_cipher::crypto::des::Des;
use des_cipher::crypto::des_key_expansion::DesKeySchedule;
use des_cipher::{DesError, Mode};

fn main() -> Result<(), DesError> {
    env_logger::init();

    let key = 0x133457799BBCDFF1u64;
    let plaintext = 0x0123456789ABCDEFu64;

    let des = Des::default();
    println!("{des}");

    let ciphertext = des.encrypt(&plaintext, &key)?;
    println!("plaintext:  {plaintext:016X}");
    println!("ciphertext: {ciphertext:016X}");

    let mode: Mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "decrypt".to_string())
        .parse()?;
    let recovered = des.apply(&ciphertext, &key, mode)?;
    println!("{mode}ed:  {recovered:016X}");

    let schedule = DesKeySchedule::with_master_key(16, &key)?;
    for (round, round_key) in schedule.round_keys()?.enumerate() {
        println!("K{:<2} = {round_key}", round + 1);
    }

    let reduced = Des::new(Some(4), None)?;
    println!(
        "4-round ciphertext: {:016X}",
        reduced.encrypt(&plaintext, &key)?
    );

    Ok(())
}
