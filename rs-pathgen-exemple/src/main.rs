use fastbloom::BloomFilter;
use rs_pathgen_core::generator::path_generator::PathGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a generator; the whole output sequence is determined by the
    // seed and the maximum word count per segment group
    let mut generator = PathGenerator::new(42, 8)?;

    // Generate a workload of unique hierarchical URL paths
    let paths = generator.generate(10_000)?;
    println!("Generated {} paths, first five:", paths.len());
    for path in paths.iter().take(5) {
        println!("  {path}");
    }

    // A fresh generator with the same seed replays the exact sequence
    let replay = PathGenerator::new(42, 8)?.generate(10_000)?;
    println!("Replay identical: {}", replay == paths);

    // maxWords must be at least 2; below that the word-budget draw has
    // an empty range and generation fails
    match PathGenerator::new(42, 1)?.generate(1) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("maxWords=1 is invalid: {e}"),
    }

    // Feed the workload into the membership filter under test
    // (expected element count and target false-positive rate)
    let mut filter = BloomFilter::with_false_pos(0.001)
        .seed(&42)
        .expected_items(paths.len());
    for path in &paths {
        filter.insert(path.as_str());
    }

    // The filter never loses an inserted key
    let contained = paths.iter().filter(|path| filter.contains(path.as_str())).count();
    println!("Contained after insert: {contained}/{}", paths.len());

    // Paths the dictionary cannot produce come back negative, up to the
    // configured false-positive rate
    let probes = 100_000;
    let mut false_positives = 0;
    for index in 0..probes {
        if filter.contains(format!("/never/generated-{index}.bin").as_str()) {
            false_positives += 1;
        }
    }
    println!("False positives: {false_positives}/{probes} (target rate 0.001)");

    Ok(())
}
