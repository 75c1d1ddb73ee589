use super::Service;

pub const SERVICES: &[Service] = &[
    Service {
        id: "s3",
        name: "Amazon S3",
        category: "Object storage",
        summary: "Durable, virtually unlimited object storage. The default data lake \
                  for training data, model artifacts and batch inference output.",
        ml_use_cases: &[
            "Training and validation datasets for SageMaker jobs",
            "Model artifacts written by training jobs",
            "Batch transform input and output",
        ],
        strengths: &[
            "Eleven nines of durability",
            "Storage classes and lifecycle rules for cost control",
            "Native integration with Glue, Athena and SageMaker",
        ],
        limitations: &[
            "Not a POSIX file system",
            "Per-request latency is higher than block storage",
        ],
    },
    Service {
        id: "ebs",
        name: "Amazon EBS",
        category: "Block storage",
        summary: "Low-latency block volumes attached to a single EC2 instance, \
                  used as the scratch and root volumes of training instances.",
        ml_use_cases: &[
            "Local scratch space during training",
            "Notebook instance storage",
        ],
        strengths: &[
            "Consistent low latency",
            "Provisioned IOPS for demanding workloads",
        ],
        limitations: &[
            "Bound to one Availability Zone",
            "Attached to one instance at a time (outside Multi-Attach)",
        ],
    },
    Service {
        id: "efs",
        name: "Amazon EFS",
        category: "Shared file storage",
        summary: "Elastic NFS file system shared by many instances. SageMaker can \
                  read training data from EFS without copying it first.",
        ml_use_cases: &[
            "Shared datasets across distributed training nodes",
            "Home directories for SageMaker Studio",
        ],
        strengths: &[
            "Grows and shrinks automatically",
            "Concurrent access from thousands of clients",
        ],
        limitations: &[
            "Higher cost per GB than S3",
            "Throughput scales with size unless provisioned",
        ],
    },
    Service {
        id: "fsx-lustre",
        name: "FSx for Lustre",
        category: "High-performance file system",
        summary: "Parallel file system linked to an S3 bucket. Serves data to \
                  large training clusters at hundreds of GB/s.",
        ml_use_cases: &[
            "Large-scale distributed training",
            "Repeated epochs over the same S3 dataset",
        ],
        strengths: &[
            "Sub-millisecond latency and very high throughput",
            "Lazy loads objects from a linked S3 bucket",
        ],
        limitations: &[
            "Provisioned capacity must be planned",
            "Best suited to compute-heavy, short-lived workloads",
        ],
    },
];
