//! Concurrent registration and lookup

use std::sync::Barrier;
use std::thread;

use fmtreg_application::ProviderRegistry;
use fmtreg_domain::ProviderType;

use crate::test_utils::*;

const READERS: usize = 4;
const READS_PER_THREAD: usize = 500;

#[test]
fn test_batch_registration_is_atomic_for_readers() {
    let registry = ProviderRegistry::<dyn Reader>::new();
    let entries = numbered_entries();
    let expected = entries.len();
    let barrier = Barrier::new(READERS + 1);

    thread::scope(|scope| {
        for _ in 0..READERS {
            scope.spawn(|| {
                barrier.wait();
                for _ in 0..READS_PER_THREAD {
                    let seen = registry.provider_infos().len();
                    assert!(
                        seen == 0 || seen == expected,
                        "Observed partial batch of {seen} providers"
                    );
                }
            });
        }

        scope.spawn(|| {
            barrier.wait();
            registry.register_providers(&entries, CAP_READER);
        });
    });

    assert_eq!(registry.len(), expected);
}

#[test]
fn test_concurrent_duplicate_registration_keeps_one_entry() {
    let registry = ProviderRegistry::<dyn Reader>::new();
    let threads = 8;
    let barrier = Barrier::new(threads);

    let accepted: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    registry.register_provider(
                        ProviderType::of::<ZipReader>(),
                        [cbz_format()],
                        Some(factory_of::<ZipReader>()),
                    )
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| usize::from(handle.join().expect("thread panicked")))
            .sum()
    });

    assert_eq!(accepted, 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_lookups_during_registration() {
    let registry = ProviderRegistry::<dyn Reader>::new();
    registry.register_provider(
        ProviderType::of::<ZipReader>(),
        [cbz_format()],
        Some(factory_of::<ZipReader>()),
    );
    let entries = numbered_entries();

    thread::scope(|scope| {
        scope.spawn(|| registry.register_providers(&entries, CAP_READER));
        scope.spawn(|| {
            for _ in 0..READS_PER_THREAD {
                assert_eq!(
                    registry.source_provider_type("book.cbz"),
                    Some(ProviderType::of::<ZipReader>())
                );
                assert!(registry.create_source_provider("book.cbz").is_some());
            }
        });
    });

    assert_eq!(registry.len(), entries.len() + 1);
}
