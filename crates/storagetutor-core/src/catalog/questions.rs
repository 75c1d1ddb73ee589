use super::Question;

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "q-datalake",
        prompt: "Which service is the usual data lake for SageMaker training data?",
        choices: &["Amazon EBS", "Amazon EFS", "Amazon S3", "Instance store"],
        correct: 2,
        explanation: "S3 is durable, cheap and read natively by every SageMaker input mode.",
    },
    Question {
        id: "q-throughput",
        prompt: "A 64-node training cluster re-reads the same S3 dataset every epoch. \
                 What reduces data loading time the most?",
        choices: &[
            "Copy the data to each EBS volume",
            "FSx for Lustre linked to the bucket",
            "Enable S3 Transfer Acceleration",
            "Store the data in DynamoDB",
        ],
        correct: 1,
        explanation: "FSx for Lustre caches S3 objects and serves them in parallel.",
    },
    Question {
        id: "q-pipe",
        prompt: "Which input format is required to use Pipe mode with Linear Learner?",
        choices: &["CSV", "JSON Lines", "Parquet", "RecordIO-protobuf"],
        correct: 3,
        explanation: "Pipe mode streams RecordIO-protobuf records directly from S3.",
    },
    Question {
        id: "q-columnar",
        prompt: "Analysts query three of forty columns with Athena. Which format cuts scan cost?",
        choices: &["CSV", "Parquet", "Avro", "JSON Lines"],
        correct: 1,
        explanation: "Columnar Parquet lets Athena read only the referenced columns.",
    },
    Question {
        id: "q-shared",
        prompt: "Several notebook instances must read and write the same files \
                 through a POSIX interface. Which service fits?",
        choices: &["Amazon EFS", "Amazon S3", "Amazon EBS", "S3 Glacier"],
        correct: 0,
        explanation: "EFS is an NFS file system that many instances mount at once.",
    },
    Question {
        id: "q-archive",
        prompt: "Raw training data must be kept for seven years and is rarely read. \
                 What is the cheapest option?",
        choices: &[
            "S3 Standard",
            "S3 Glacier Deep Archive",
            "EFS Standard",
            "Provisioned IOPS EBS",
        ],
        correct: 1,
        explanation: "Deep Archive has the lowest storage price for data read a few times a year.",
    },
    Question {
        id: "q-xgboost",
        prompt: "For the built-in XGBoost algorithm with CSV input, where must the label be?",
        choices: &[
            "In the last column",
            "In a separate file",
            "In the first column",
            "In a header row",
        ],
        correct: 2,
        explanation: "SageMaker CSV input expects the target in the first column and no header.",
    },
    Question {
        id: "q-scratch",
        prompt: "Which storage is attached to a single training instance as its scratch volume?",
        choices: &["Amazon S3", "Amazon EFS", "FSx for Lustre", "Amazon EBS"],
        correct: 3,
        explanation: "EBS volumes attach to one instance and back its local file system.",
    },
];
