use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use bank_accounts::{AccountId, Amount, Bank, Operation, SavingsAccount, Sequence};

/// Generates valid operation sequences for benchmarking.
///
/// Each client opens one account, then repeats:
/// 1. Deposit 100
/// 2. Deposit 50
/// 3. Withdrawal 30
///
/// Account ids start at 1, so client `n` owns account `n`.
pub struct OpGenerator {
    num_clients: u32,
    ops_per_client: u32,
    current_client: u32,
    current_step: u32,
}

impl OpGenerator {
    pub fn new(num_clients: u32, ops_per_client: u32) -> Self {
        Self {
            num_clients,
            ops_per_client,
            current_client: 1,
            current_step: 0,
        }
    }

    fn client_name(&self) -> String {
        format!("client-{}", self.current_client)
    }
}

impl Iterator for OpGenerator {
    type Item = Operation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_client > self.num_clients {
            return None;
        }

        let client = self.client_name();
        let account: AccountId = self.current_client;

        let op = if self.current_step == 0 {
            Operation::Open {
                client,
                initial: Amount::ZERO,
            }
        } else {
            match (self.current_step - 1) % 3 {
                0 => Operation::Deposit {
                    client,
                    account,
                    amount: Amount::new(100),
                },
                1 => Operation::Deposit {
                    client,
                    account,
                    amount: Amount::new(50),
                },
                _ => Operation::Withdrawal {
                    client,
                    account,
                    amount: Amount::new(30),
                },
            }
        };

        self.current_step += 1;

        // Move to next client after the opening plus ops_per_client operations
        if self.current_step > self.ops_per_client {
            self.current_step = 0;
            self.current_client += 1;
        }

        Some(op)
    }
}

fn bank() -> Bank {
    Bank::with_ids(Sequence::new(1))
}

fn bench_single_client(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_client");

    for count in [10_000u32, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut bank = bank();
                for op in OpGenerator::new(1, count) {
                    let _ = black_box(bank.apply(op));
                }
                bank
            });
        });
    }

    group.finish();
}

fn bench_many_clients(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_clients");

    for (clients, ops_per) in [(100, 1_000), (1_000, 100)] {
        let label = format!("{}c_{}op", clients, ops_per);
        group.bench_with_input(
            BenchmarkId::from_parameter(&label),
            &(clients, ops_per),
            |b, &(clients, ops_per)| {
                b.iter(|| {
                    let mut bank = bank();
                    for op in OpGenerator::new(clients, ops_per) {
                        let _ = black_box(bank.apply(op));
                    }
                    bank
                });
            },
        );
    }

    group.finish();
}

fn bench_interest_accrual(c: &mut Criterion) {
    let mut group = c.benchmark_group("interest");

    group.bench_function("1k_accruals", |b| {
        b.iter(|| {
            let mut savings = SavingsAccount::new("bench", Amount::new(5000), 0.0001)
                .expect("valid savings account");
            for _ in 0..1_000 {
                let _ = black_box(savings.accrue_interest());
            }
            savings
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_client,
    bench_many_clients,
    bench_interest_accrual,
);

criterion_main!(benches);
