use super::{Lesson, Section, SectionKind};

pub const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        title: "Storage for ML",
        kind: SectionKind::Lesson(Lesson {
            paragraphs: &[
                "Every ML workload moves data through storage three times: when \
                 raw data lands, when features are prepared, and when a training \
                 job reads its input.",
                "Choosing the right service at each step decides how fast training \
                 starts, how much it costs, and who else can use the data.",
            ],
            key_points: &[
                "S3 is the default home for datasets and model artifacts",
                "File systems (EFS, FSx) help when code expects POSIX paths",
                "Block storage (EBS) is local to one instance",
            ],
        }),
    },
    Section {
        id: "s3",
        title: "Amazon S3",
        kind: SectionKind::Lesson(Lesson {
            paragraphs: &[
                "S3 stores objects in buckets. Storage classes trade retrieval \
                 speed for price, and lifecycle rules move objects between them.",
                "SageMaker reads S3 in File mode (download first), Pipe mode \
                 (stream) or Fast File mode (stream through a POSIX view).",
            ],
            key_points: &[
                "Standard, Intelligent-Tiering, Standard-IA, Glacier classes",
                "Partition prefixes by date or label for parallel reads",
                "Use Pipe or Fast File mode for large datasets",
            ],
        }),
    },
    Section {
        id: "file-systems",
        title: "EBS, EFS and FSx",
        kind: SectionKind::Lesson(Lesson {
            paragraphs: &[
                "EBS volumes are block devices for a single instance. EFS is an \
                 elastic NFS share. FSx for Lustre is a parallel file system that \
                 can front an S3 bucket.",
                "SageMaker training jobs can mount EFS or FSx directly, which \
                 removes the download step for very large datasets.",
            ],
            key_points: &[
                "EBS: one instance, one Availability Zone",
                "EFS: many clients, pay for what you store",
                "FSx for Lustre: highest throughput for training clusters",
            ],
        }),
    },
    Section {
        id: "services",
        title: "Service Analysis",
        kind: SectionKind::ServiceAnalysis,
    },
    Section {
        id: "formats",
        title: "Format Analysis",
        kind: SectionKind::FormatAnalysis,
    },
    Section {
        id: "puzzle",
        title: "Matching Game",
        kind: SectionKind::Puzzle,
    },
    Section {
        id: "quiz",
        title: "Knowledge Check",
        kind: SectionKind::Quiz,
    },
];
