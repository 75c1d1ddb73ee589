use super::{FileFormat, StorageLayout};

pub const FORMATS: &[FileFormat] = &[
    FileFormat {
        id: "csv",
        name: "CSV",
        layout: StorageLayout::Row,
        summary: "Plain text, one record per line. Easy to produce and inspect, \
                  but untyped and uncompressed.",
        best_for: &["Small tabular datasets", "Built-in algorithms such as XGBoost"],
        sagemaker: "text/csv; label in the first column, no header",
    },
    FileFormat {
        id: "jsonl",
        name: "JSON Lines",
        layout: StorageLayout::Row,
        summary: "One JSON document per line. Handles nested and semi-structured \
                  records at the cost of verbose encoding.",
        best_for: &["Event and log data", "Ground Truth manifests"],
        sagemaker: "application/jsonlines for batch transform and BlazingText",
    },
    FileFormat {
        id: "parquet",
        name: "Apache Parquet",
        layout: StorageLayout::Columnar,
        summary: "Compressed columnar format with embedded schema. Queries read \
                  only the columns they need.",
        best_for: &["Analytics with Athena and Redshift Spectrum", "Feature engineering in Glue"],
        sagemaker: "Supported by Data Wrangler and Feature Store offline storage",
    },
    FileFormat {
        id: "orc",
        name: "Apache ORC",
        layout: StorageLayout::Columnar,
        summary: "Columnar format from the Hive ecosystem with lightweight indexes \
                  and strong compression.",
        best_for: &["Hive and EMR workloads"],
        sagemaker: "Convert to Parquet or RecordIO before training",
    },
    FileFormat {
        id: "avro",
        name: "Apache Avro",
        layout: StorageLayout::Row,
        summary: "Binary row format with a schema stored alongside the data. \
                  Supports schema evolution.",
        best_for: &["Streaming pipelines", "Kafka and Kinesis payloads"],
        sagemaker: "Convert before training",
    },
    FileFormat {
        id: "recordio",
        name: "RecordIO-protobuf",
        layout: StorageLayout::Row,
        summary: "Binary protobuf records. The most efficient input for many \
                  SageMaker built-in algorithms, and required for Pipe mode.",
        best_for: &["Linear Learner, k-means, PCA", "Pipe mode streaming from S3"],
        sagemaker: "application/x-recordio-protobuf",
    },
];
