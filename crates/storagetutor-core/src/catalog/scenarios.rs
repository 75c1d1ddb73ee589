use super::Scenario;

/// The labels learners drag onto scenarios.
pub const PUZZLE_LABELS: &[&str] = &[
    "Amazon S3",
    "Amazon EBS",
    "Amazon EFS",
    "FSx for Lustre",
    "S3 Glacier",
];

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "p-datalake",
        prompt: "Central data lake for raw and processed training data",
        candidates: PUZZLE_LABELS,
        answer: "Amazon S3",
    },
    Scenario {
        id: "p-artifacts",
        prompt: "Destination for model artifacts produced by training jobs",
        candidates: PUZZLE_LABELS,
        answer: "Amazon S3",
    },
    Scenario {
        id: "p-root-volume",
        prompt: "Root volume of a single GPU training instance",
        candidates: PUZZLE_LABELS,
        answer: "Amazon EBS",
    },
    Scenario {
        id: "p-iops",
        prompt: "Database on EC2 needing provisioned IOPS",
        candidates: PUZZLE_LABELS,
        answer: "Amazon EBS",
    },
    Scenario {
        id: "p-studio-home",
        prompt: "Home directories shared across SageMaker Studio users",
        candidates: PUZZLE_LABELS,
        answer: "Amazon EFS",
    },
    Scenario {
        id: "p-nfs",
        prompt: "POSIX file share mounted by many notebook instances",
        candidates: PUZZLE_LABELS,
        answer: "Amazon EFS",
    },
    Scenario {
        id: "p-hpc",
        prompt: "Feeding a 100-node training cluster at hundreds of GB/s",
        candidates: PUZZLE_LABELS,
        answer: "FSx for Lustre",
    },
    Scenario {
        id: "p-epochs",
        prompt: "Low-latency cache over an S3 dataset read every epoch",
        candidates: PUZZLE_LABELS,
        answer: "FSx for Lustre",
    },
    Scenario {
        id: "p-compliance",
        prompt: "Seven-year retention of raw data for compliance",
        candidates: PUZZLE_LABELS,
        answer: "S3 Glacier",
    },
    Scenario {
        id: "p-cold",
        prompt: "Old experiment logs read once or twice a year",
        candidates: PUZZLE_LABELS,
        answer: "S3 Glacier",
    },
];
